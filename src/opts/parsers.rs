use std::path::PathBuf;
use std::str::FromStr;

use crate::prelude::*;

pub fn sample_rate(value: &str) -> Result<f32> {
    match f32::from_str(value)? {
        value if (0.0..=1.0).contains(&value) => Ok(value),
        value => Err(anyhow!("{} is not within 0.0..=1.0", value)),
    }
}

pub fn json_path(value: &str) -> Result<PathBuf> {
    let path = PathBuf::from(value);
    match path.extension() {
        Some(extension) if extension == "json" => Ok(path),
        _ => Err(anyhow!("expected a `.json` file")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rate_ok() -> Result {
        assert_eq!(sample_rate("0.25")?, 0.25);
        assert!(sample_rate("1.5").is_err());
        assert!(sample_rate("nope").is_err());
        Ok(())
    }

    #[test]
    fn json_path_ok() {
        assert!(json_path("static/data/questions.json").is_ok());
        assert!(json_path("static/data/questions.yaml").is_err());
        assert!(json_path("questions").is_err());
    }
}
