/// Structural validation run after a config is deserialized and before it is
/// handed to the rest of the program.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
