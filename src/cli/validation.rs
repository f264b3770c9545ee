//! CLI argument validation functions
//!
//! Value parsers for arguments that need more than clap's built-in checks.

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use bigdecimal::BigDecimal;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Parse a positive decimal amount such as `10` or `19.95`
pub fn validate_amount(amount_str: &str) -> Result<BigDecimal, String> {
    let amount = BigDecimal::from_str(amount_str.trim())
        .map_err(|_| format!("Amount must be a decimal number, got: '{}'", amount_str))?;

    if amount <= BigDecimal::from(0) {
        return Err("Amount must be greater than 0".to_string());
    }

    Ok(amount)
}

/// Accept a three-letter currency code in any case, normalized to upper case
pub fn validate_currency(currency_str: &str) -> Result<String, String> {
    let currency = currency_str.trim();
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!(
            "Currency must be a three-letter ISO 4217 code, got: '{}'",
            currency_str
        ));
    }
    Ok(currency.to_ascii_uppercase())
}

/// Card numbers may be typed with spaces or dashes; only digits are kept
pub fn validate_card_number(number_str: &str) -> Result<String, String> {
    let digits: String = number_str
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("Card number may only contain digits, spaces or dashes".to_string());
    }
    if !(12..=19).contains(&digits.len()) {
        return Err(format!(
            "Card number must be between 12 and 19 digits, got {}",
            digits.len()
        ));
    }
    Ok(digits)
}

/// Two-digit month, `1` is padded to `01`
pub fn validate_expiry_month(month_str: &str) -> Result<String, String> {
    let month: u8 = month_str
        .trim()
        .parse()
        .map_err(|_| format!("Expiry month must be a number, got: '{}'", month_str))?;
    if !(1..=12).contains(&month) {
        return Err("Expiry month must be between 1 and 12".to_string());
    }
    Ok(format!("{:02}", month))
}

/// Two-digit year; a four-digit year keeps its last two digits
pub fn validate_expiry_year(year_str: &str) -> Result<String, String> {
    let year = year_str.trim();
    let valid = matches!(year.len(), 2 | 4) && year.chars().all(|c| c.is_ascii_digit());
    if !valid {
        return Err(format!("Expiry year must be YY or YYYY, got: '{}'", year_str));
    }
    Ok(year[year.len() - 2..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_config_file_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[gateway]").unwrap();

        let path = file.path().to_str().unwrap();
        assert!(validate_config_file_path(path).is_ok());
        assert!(validate_config_file_path("/nonexistent/paydock.toml").is_err());
    }

    #[test]
    fn test_validate_config_file_path_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = validate_config_file_path(dir.path().to_str().unwrap());
        assert!(result.unwrap_err().contains("not a file"));
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount("19.95").unwrap(), BigDecimal::from_str("19.95").unwrap());
        assert!(validate_amount("0").is_err());
        assert!(validate_amount("-5").is_err());
        assert!(validate_amount("ten").is_err());
    }

    #[test]
    fn test_validate_currency() {
        assert_eq!(validate_currency("aud").unwrap(), "AUD");
        assert!(validate_currency("AU").is_err());
        assert!(validate_currency("A1D").is_err());
    }

    #[test]
    fn test_validate_card_number() {
        assert_eq!(
            validate_card_number("4200 0000-0000 0000").unwrap(),
            "4200000000000000"
        );
        assert!(validate_card_number("4200").is_err());
        assert!(validate_card_number("4200x000000000000").is_err());
    }

    #[test]
    fn test_validate_expiry() {
        assert_eq!(validate_expiry_month("3").unwrap(), "03");
        assert!(validate_expiry_month("13").is_err());
        assert_eq!(validate_expiry_year("2031").unwrap(), "31");
        assert_eq!(validate_expiry_year("29").unwrap(), "29");
        assert!(validate_expiry_year("203").is_err());
    }
}
