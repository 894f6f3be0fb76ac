use mediacli::params::MAX_MAPPING_RESULTS;
#[cfg(feature = "write")]
use mediacli::transformation::Transformation;

pub(super) fn parse_max_results(s: &str) -> Result<u32, String> {
    let value = s
        .trim()
        .parse::<u32>()
        .map_err(|_| "max results must be a positive integer".to_string())?;
    if value == 0 {
        return Err("max results must be at least 1".to_string());
    }
    if value > MAX_MAPPING_RESULTS {
        return Err(format!("max results must be at most {MAX_MAPPING_RESULTS}"));
    }
    Ok(value)
}

#[cfg(feature = "write")]
pub(super) fn parse_transformation(s: &str) -> Result<Transformation, String> {
    let transformation: Transformation = s.parse().map_err(|_| "invalid transformation".to_string())?;
    if transformation.is_empty() {
        return Err("transformation cannot be empty".to_string());
    }
    Ok(transformation)
}

#[cfg(feature = "write")]
pub(super) fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err("key cannot be empty".to_string());
    }
    Ok((key.to_string(), value.to_string()))
}
