use crate::error::CliError;
use rgb565_convert::ConvertStrategy;

/// Parses a packed RGBA8888 colour written in hex, with or without a `0x` prefix.
/// Underscores are allowed as digit separators. Signs are not.
pub fn parse_hex_colour(input: &str) -> Result<u32, CliError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .replace('_', "");

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CliError::InvalidDigits {
            input: input.to_string(),
        });
    }

    u32::from_str_radix(&digits, 16).map_err(|source| CliError::InvalidColour {
        input: input.to_string(),
        source,
    })
}

/// Parses a strategy name for argh.
pub fn parse_strategy(value: &str) -> Result<ConvertStrategy, String> {
    ConvertStrategy::from_name(value).ok_or_else(|| {
        let names: Vec<&str> = ConvertStrategy::all_values()
            .iter()
            .map(|s| s.name())
            .collect();
        format!(
            "Invalid strategy: {}. Valid strategies are: {}",
            value,
            names.join(", ")
        )
    })
}
