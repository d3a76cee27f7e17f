use crate::utils::error::{LinkError, Result};
use url::Url;

pub const MAX_CODE_LENGTH: usize = 128;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LinkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LinkError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LinkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 深層連結使用應用程式自訂 scheme (例如 splitmate://parent)
pub fn validate_deep_link_base(field_name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| LinkError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Invalid deep link format: {}", e),
    })?;

    if url.query().is_some() || url.fragment().is_some() {
        return Err(LinkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Deep link base must not contain a query or fragment".to_string(),
        });
    }

    Ok(())
}

pub fn validate_package_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    let segments: Vec<&str> = value.split('.').collect();
    let valid = segments.len() >= 2
        && segments.iter().all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });

    if !valid {
        return Err(LinkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Package name must look like com.example.app".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| LinkError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LinkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LinkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 驗證邀請碼：必填、非空白、長度上限、不含控制字元
pub fn validate_code(code: Option<&str>) -> Result<&str> {
    let code = code.ok_or_else(|| LinkError::ValidationError {
        field: "code".to_string(),
        message: "code is required".to_string(),
    })?;

    if code.trim().is_empty() {
        return Err(LinkError::ValidationError {
            field: "code".to_string(),
            message: "code cannot be empty".to_string(),
        });
    }

    if code.chars().count() > MAX_CODE_LENGTH {
        return Err(LinkError::ValidationError {
            field: "code".to_string(),
            message: format!("code cannot exceed {} characters", MAX_CODE_LENGTH),
        });
    }

    if code.chars().any(char::is_control) {
        return Err(LinkError::ValidationError {
            field: "code".to_string(),
            message: "code cannot contain control characters".to_string(),
        });
    }

    Ok(code)
}
