use snmp2::Oid;

use crate::error::{PrinterError, Result};

/// Парсит строку OID (ведущая точка допускается) в объект Oid
pub fn parse_oid(s: &str) -> Result<Oid<'static>> {
    let parts: std::result::Result<Vec<u64>, _> = s
        .trim()
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect();

    let parts =
        parts.map_err(|e| PrinterError::config(format!("Невалидный OID '{}': {}", s, e)))?;

    if parts.len() < 2 {
        return Err(PrinterError::config(format!("Слишком короткий OID: '{}'", s)));
    }

    Oid::from(&parts)
        .map_err(|e| PrinterError::config(format!("Не удалось создать Oid из '{}': {:?}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_oid_with_leading_dot() {
        let dotted = parse_oid(".1.3.6.1.2.1.43.11.1.1.9.1.1").unwrap();
        let plain = parse_oid("1.3.6.1.2.1.43.11.1.1.9.1.1").unwrap();
        assert_eq!(dotted, plain);
    }

    #[test]
    fn test_parse_oid_rejects_garbage() {
        assert!(matches!(
            parse_oid("1.3.six.1"),
            Err(PrinterError::Configuration(_))
        ));
        assert!(parse_oid("").is_err());
    }
}
