//! Chinese numerals via section accumulation.
//!
//! Units below 万 add `digit × unit` into the running section; 万/亿 close the
//! section, multiply it and move it into the total. A unit with no digit in
//! front counts as 1 ("十二" = 12, "十" = 10).

/// Digit value of a CJK numeral character (simplified, traditional, financial).
fn digit_of(c: char) -> Option<i64> {
    let v = match c {
        '零' => 0,
        '一' | '壹' => 1,
        '二' | '两' | '兩' | '贰' | '貳' => 2,
        '三' | '叁' | '參' | '仨' => 3,
        '四' | '肆' => 4,
        '五' | '伍' => 5,
        '六' | '陆' | '陸' => 6,
        '七' | '柒' => 7,
        '八' | '捌' => 8,
        '九' | '玖' => 9,
        _ => return None,
    };
    Some(v)
}

fn unit_of(c: char) -> Option<i64> {
    let v = match c {
        '十' | '拾' => 10,
        '百' | '佰' => 100,
        '千' | '仟' => 1_000,
        '万' | '萬' => 10_000,
        '亿' | '億' => 100_000_000,
        _ => return None,
    };
    Some(v)
}

/// True for any character the Chinese parser understands (digit or unit).
#[inline]
pub fn is_cjk_numeral(c: char) -> bool {
    digit_of(c).is_some() || unit_of(c).is_some()
}

/// Parse a Chinese numeral. Characters that are neither digits nor units are skipped.
pub fn parse_chinese(s: &str) -> i64 {
    let mut total: i64 = 0;
    let mut section: i64 = 0;
    let mut digit: i64 = 0;
    let mut prev_was_unit = false;

    for c in s.chars() {
        if let Some(d) = digit_of(c) {
            digit = d;
            prev_was_unit = false;
        } else if let Some(unit) = unit_of(c) {
            // "十二": bare unit means one of it; "百十" keeps the 十 empty
            if digit == 0 && !prev_was_unit {
                digit = 1;
            }
            if unit >= 10_000 {
                if section == 0 && digit == 0 {
                    section = 1;
                } else {
                    section = section.saturating_add(digit);
                }
                total = total.saturating_add(section.saturating_mul(unit));
                section = 0;
            } else {
                section = section.saturating_add(digit.saturating_mul(unit));
            }
            digit = 0;
            prev_was_unit = true;
        }
    }

    total.saturating_add(section).saturating_add(digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_digits_and_tens() {
        assert_eq!(parse_chinese("一"), 1);
        assert_eq!(parse_chinese("十"), 10);
        assert_eq!(parse_chinese("十二"), 12);
        assert_eq!(parse_chinese("二十"), 20);
        assert_eq!(parse_chinese("九十九"), 99);
    }

    #[test]
    fn hundreds_with_zero() {
        assert_eq!(parse_chinese("一百零五"), 105);
        assert_eq!(parse_chinese("三百二十一"), 321);
        assert_eq!(parse_chinese("两千"), 2000);
    }

    #[test]
    fn wan_and_yi_close_sections() {
        assert_eq!(parse_chinese("一万二千"), 12_000);
        assert_eq!(parse_chinese("十万"), 100_000);
        assert_eq!(parse_chinese("万"), 10_000);
        assert_eq!(parse_chinese("三亿"), 300_000_000);
    }

    #[test]
    fn traditional_and_financial_forms() {
        assert_eq!(parse_chinese("壹佰貳拾參"), 123);
        assert_eq!(parse_chinese("陸萬"), 60_000);
        assert_eq!(parse_chinese("拾"), 10);
    }

    #[test]
    fn surrounding_text_is_ignored() {
        assert_eq!(parse_chinese("第十章"), 10);
        assert_eq!(parse_chinese("第一百回"), 100);
    }

    #[test]
    fn classification() {
        assert!(is_cjk_numeral('零'));
        assert!(is_cjk_numeral('億'));
        assert!(!is_cjk_numeral('第'));
        assert!(!is_cjk_numeral('1'));
    }
}
