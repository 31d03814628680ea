/// Result-carrying action family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtherAction {
    Ok(i64),
    Err(String),
}
