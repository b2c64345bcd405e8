//! English number words ("twenty-one", "one hundred five", "two thousand").

fn word_value(w: &str) -> Option<i64> {
    let v = match w {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        "hundred" => 100,
        "thousand" => 1_000,
        "million" => 1_000_000,
        "billion" => 1_000_000_000,
        _ => return None,
    };
    Some(v)
}

/// Parse English number words split on whitespace or '-'.
///
/// A non-number word flushes the pending value into the total, so
/// "five and six" gives 11. Returns 0 when nothing numeric is found.
pub fn parse_english(s: &str) -> i64 {
    let lower = s.to_lowercase();
    let mut total: i64 = 0;
    let mut current: i64 = 0;

    for word in lower.split(|c: char| c.is_whitespace() || c == '-') {
        match word_value(word) {
            Some(v) if v >= 1_000 => {
                let base = if current > 0 { current } else { 1 };
                total = total.saturating_add(base.saturating_mul(v));
                current = 0;
            }
            Some(v) if v >= 100 => {
                let base = if current > 0 { current } else { 1 };
                current = base.saturating_mul(v);
            }
            Some(v) => current = current.saturating_add(v),
            None => {
                total = total.saturating_add(current);
                current = 0;
            }
        }
    }

    total.saturating_add(current)
}
