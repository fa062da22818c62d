//! 日期工具函数 - 记录日期校验

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::{AppError, AppResult};

/// 校验记录日期是否为 ISO-8601 格式
///
/// 接受 `YYYY`、`YYYY-MM`、`YYYY-MM-DD`、`YYYY-MM-DD[T ]HH:MM[:SS[.fff]]` 与 RFC 3339。
/// 原样返回输入 (去除首尾空白)，不做时区换算。
pub fn parse_record_date(date: &str) -> AppResult<String> {
    let date = date.trim();
    if is_iso_date(date) {
        Ok(date.to_string())
    } else {
        Err(AppError::validation(format!("Invalid date format: {}", date)))
    }
}

fn is_iso_date(date: &str) -> bool {
    const DATE_TIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    match date.len() {
        // 精度降低的日期: 年 / 年-月
        4 => date.bytes().all(|b| b.is_ascii_digit()),
        7 => {
            date.as_bytes()[4] == b'-'
                && NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d").is_ok()
        }
        _ => {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
                || DateTime::parse_from_rfc3339(date).is_ok()
                || DATE_TIME_FORMATS
                    .iter()
                    .any(|fmt| NaiveDateTime::parse_from_str(date, fmt).is_ok())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_iso_shapes() {
        assert_eq!(parse_record_date("2024-01-01").unwrap(), "2024-01-01");
        assert!(parse_record_date("2024-01-01T10:30").is_ok());
        assert!(parse_record_date("2024-01-01T10:30:00").is_ok());
        assert!(parse_record_date("2024-01-01T10:30:00.123Z").is_ok());
        assert!(parse_record_date("2024-01-01T10:30:00+08:00").is_ok());
    }

    #[test]
    fn test_accepts_reduced_precision_and_space_separator() {
        assert_eq!(parse_record_date("2024").unwrap(), "2024");
        assert_eq!(parse_record_date(" 2024-01 ").unwrap(), "2024-01");
        assert!(parse_record_date("2024-01-01 10:00").is_ok());
        assert!(parse_record_date("2024-01-01 10:00:30.5").is_ok());
        assert!(parse_record_date("2024-13").is_err());
        assert!(parse_record_date("20x4").is_err());
        assert!(parse_record_date("2024/01").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            parse_record_date("yesterday"),
            Err(AppError::Validation(_))
        ));
        assert!(parse_record_date("2024-13-01").is_err());
        assert!(parse_record_date("01/02/2024").is_err());
    }
}
