//! Style validation errors.

/// Error returned by the opt-in `validate` checks on style records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleValidationError {
    /// An overlay sets a property its base style never defines.
    #[error("state '{state}' overrides property '{property}' which the base style does not define")]
    UnknownProperty { state: String, property: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_property_display() {
        let err = StyleValidationError::UnknownProperty {
            state: "active.hovered".to_string(),
            property: "colour".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("active.hovered"));
        assert!(msg.contains("colour"));
    }
}
