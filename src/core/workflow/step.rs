use serde_yaml::Value;

/// Shape of a single `steps` entry after classification.
///
/// `Command` lends out the mutable `run` node so the guard can rewrite it in
/// place. Non-mapping entries and steps with a missing or falsy `run` are
/// `Inert` and pass through untouched.
#[derive(Debug)]
pub enum StepShape<'a> {
    Command { run: &'a mut Value },
    Inert,
}

pub fn classify(step: &mut Value) -> StepShape<'_> {
    match step {
        Value::Mapping(entries) => match entries.get_mut("run") {
            Some(run) if !is_falsy(run) => StepShape::Command { run },
            _ => StepShape::Inert,
        },
        _ => StepShape::Inert,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}
