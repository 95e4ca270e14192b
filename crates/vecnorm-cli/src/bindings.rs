//! `--vector` / `--scalar` command-line bindings

/// `name=1,2,3`
#[derive(Debug, Clone, PartialEq)]
pub struct VectorBinding {
    pub name: String,
    pub values: Vec<f64>,
}

/// `name=2.5`
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarBinding {
    pub name: String,
    pub value: f64,
}

fn split_binding(s: &str) -> Result<(&str, &str), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{}'", s));
    }
    Ok((name, value.trim()))
}

fn parse_number(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number '{}': {}", s.trim(), e))
}

pub fn parse_vector_binding(s: &str) -> Result<VectorBinding, String> {
    let (name, values) = split_binding(s)?;
    let values = values.trim_start_matches('[').trim_end_matches(']');

    let values = if values.trim().is_empty() {
        Vec::new()
    } else {
        values
            .split(',')
            .map(parse_number)
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(VectorBinding {
        name: name.to_string(),
        values,
    })
}

pub fn parse_scalar_binding(s: &str) -> Result<ScalarBinding, String> {
    let (name, value) = split_binding(s)?;
    Ok(ScalarBinding {
        name: name.to_string(),
        value: parse_number(value)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_binding() {
        let b = parse_vector_binding("x=1,2,3.5").unwrap();
        assert_eq!(b.name, "x");
        assert_eq!(b.values, vec![1.0, 2.0, 3.5]);

        let b = parse_vector_binding("v = [ -1, 2 ]").unwrap();
        assert_eq!(b.name, "v");
        assert_eq!(b.values, vec![-1.0, 2.0]);

        let b = parse_vector_binding("e=").unwrap();
        assert!(b.values.is_empty());
    }

    #[test]
    fn test_scalar_binding() {
        let b = parse_scalar_binding("p=3").unwrap();
        assert_eq!(b, ScalarBinding { name: "p".to_string(), value: 3.0 });
    }

    #[test]
    fn test_malformed_bindings() {
        assert!(parse_vector_binding("x").is_err());
        assert!(parse_vector_binding("=1,2").is_err());
        assert!(parse_vector_binding("x=1,,2").is_err());
        assert!(parse_scalar_binding("p=abc").is_err());
    }
}
