use crate::utils::error::{MatrixError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MatrixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MatrixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MatrixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_no_inner_whitespace(field_name: &str, value: &str) -> Result<()> {
    if value.chars().any(char::is_whitespace) {
        return Err(MatrixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot contain whitespace".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("board", "seeeduino_xiao_ble").is_ok());
        assert!(validate_non_empty_string("board", "").is_err());
        assert!(validate_non_empty_string("board", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("snippets_dir", "config/snippets").is_ok());
        assert!(validate_path("snippets_dir", "").is_err());
        assert!(validate_path("snippets_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_no_inner_whitespace() {
        assert!(validate_no_inner_whitespace("artifact_prefix", "MDK").is_ok());
        assert!(validate_no_inner_whitespace("artifact_prefix", "M DK").is_err());
    }
}
