#[cfg(test)]
use mockall::automock;

/// Number-to-words collaborator consumed by the normalizer
#[cfg_attr(test, automock)]
pub trait NumberLexicon {
    /// English word form of an integer, e.g. `25` -> `"twenty-five"`.
    fn words(&self, value: i64) -> String;
}

/// Built-in English cardinal lexicon: hyphenated tens-ones, short-scale
/// group names, "negative" prefix for values below zero
pub struct EnglishLexicon;

impl NumberLexicon for EnglishLexicon {
    fn words(&self, value: i64) -> String {
        if value < 0 {
            format!("negative {}", cardinal(value.unsigned_abs()))
        } else {
            cardinal(value as u64)
        }
    }
}

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

fn cardinal(n: u64) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    if n < 100 {
        let tens = TENS[(n / 10) as usize];
        return match n % 10 {
            0 => tens.to_string(),
            ones => format!("{}-{}", tens, ONES[ones as usize]),
        };
    }
    if n < 1_000 {
        let hundreds = format!("{} hundred", ONES[(n / 100) as usize]);
        return match n % 100 {
            0 => hundreds,
            rest => format!("{} {}", hundreds, cardinal(rest)),
        };
    }
    for (scale, name) in SCALES {
        if n >= scale {
            let group = format!("{} {}", cardinal(n / scale), name);
            return match n % scale {
                0 => group,
                rest => format!("{} {}", group, cardinal(rest)),
            };
        }
    }
    unreachable!("u64 values above one thousand always match a scale")
}
