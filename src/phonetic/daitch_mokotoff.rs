//! Daitch-Mokotoff Soundex
//!
//! Six-digit codes for Eastern European and Jewish surnames. Letters are
//! matched against a rule table keyed by their first character, longest
//! pattern first. Each rule has three codings: at the start of the name,
//! before a vowel, and otherwise. Codings with alternatives (`5|4`) fork the
//! code into branches, so one name may yield several codes.
//!
//! Adjacent identical codings collapse, except across an `m`/`n` pair.
//! Vowels code to nothing mid-word, which breaks collapsing. Every branch is
//! padded with `0` or cut to six digits; duplicate branches are dropped, in
//! first-seen order.

use super::PhoneticEncoder;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use smallvec::SmallVec;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Digits in every Daitch-Mokotoff code.
pub const DM_CODE_LENGTH: usize = 6;

/// `(pattern, at start, before vowel, otherwise)`; `|` separates alternatives.
#[rustfmt::skip]
const DM_RULES: &[(&str, &str, &str, &str)] = &[
    // vowels
    ("a", "0", "", ""),
    ("e", "0", "", ""),
    ("i", "0", "", ""),
    ("o", "0", "", ""),
    ("u", "0", "", ""),
    // consonants
    ("b", "7", "7", "7"),
    ("d", "3", "3", "3"),
    ("f", "7", "7", "7"),
    ("g", "5", "5", "5"),
    ("h", "5", "5", ""),
    ("k", "5", "5", "5"),
    ("l", "8", "8", "8"),
    ("m", "6", "6", "6"),
    ("n", "6", "6", "6"),
    ("p", "7", "7", "7"),
    ("q", "5", "5", "5"),
    ("r", "9", "9", "9"),
    ("s", "4", "4", "4"),
    ("t", "3", "3", "3"),
    ("v", "7", "7", "7"),
    ("w", "7", "7", "7"),
    ("x", "5", "54", "54"),
    ("y", "1", "", ""),
    ("z", "4", "4", "4"),
    // Romanian t-cedilla and t-comma
    ("ţ", "3|4", "3|4", "3|4"),
    ("ț", "3|4", "3|4", "3|4"),
    // Polish ogonek vowels: silent, or 6 when nasal
    ("ę", "", "", "|6"),
    ("ą", "", "", "|6"),
    // multi-letter
    ("schtsch", "2", "4", "4"),
    ("schtsh", "2", "4", "4"),
    ("schtch", "2", "4", "4"),
    ("shtch", "2", "4", "4"),
    ("shtsh", "2", "4", "4"),
    ("stsch", "2", "4", "4"),
    ("ttsch", "4", "4", "4"),
    ("zhdzh", "2", "4", "4"),
    ("shch", "2", "4", "4"),
    ("scht", "2", "43", "43"),
    ("schd", "2", "43", "43"),
    ("stch", "2", "4", "4"),
    ("strz", "2", "4", "4"),
    ("strs", "2", "4", "4"),
    ("stsh", "2", "4", "4"),
    ("szcz", "2", "4", "4"),
    ("szcs", "2", "4", "4"),
    ("ttch", "4", "4", "4"),
    ("tsch", "4", "4", "4"),
    ("ttsz", "4", "4", "4"),
    ("zdzh", "2", "4", "4"),
    ("zsch", "4", "4", "4"),
    ("chs", "5", "54", "54"),
    ("csz", "4", "4", "4"),
    ("czs", "4", "4", "4"),
    ("drz", "4", "4", "4"),
    ("drs", "4", "4", "4"),
    ("dsh", "4", "4", "4"),
    ("dsz", "4", "4", "4"),
    ("dzh", "4", "4", "4"),
    ("dzs", "4", "4", "4"),
    ("sch", "4", "4", "4"),
    ("sht", "2", "43", "43"),
    ("szt", "2", "43", "43"),
    ("shd", "2", "43", "43"),
    ("szd", "2", "43", "43"),
    ("tch", "4", "4", "4"),
    ("trz", "4", "4", "4"),
    ("trs", "4", "4", "4"),
    ("tsh", "4", "4", "4"),
    ("tts", "4", "4", "4"),
    ("ttz", "4", "4", "4"),
    ("tzs", "4", "4", "4"),
    ("tsz", "4", "4", "4"),
    ("zdz", "2", "4", "4"),
    ("zhd", "2", "43", "43"),
    ("zsh", "4", "4", "4"),
    ("ai", "0", "1", ""),
    ("aj", "0", "1", ""),
    ("ay", "0", "1", ""),
    ("au", "0", "7", ""),
    ("cz", "4", "4", "4"),
    ("cs", "4", "4", "4"),
    ("ds", "4", "4", "4"),
    ("dz", "4", "4", "4"),
    ("dt", "3", "3", "3"),
    ("ei", "0", "1", ""),
    ("ej", "0", "1", ""),
    ("ey", "0", "1", ""),
    ("eu", "1", "1", ""),
    ("fb", "7", "7", "7"),
    ("ia", "1", "", ""),
    ("ie", "1", "", ""),
    ("io", "1", "", ""),
    ("iu", "1", "", ""),
    ("ks", "5", "54", "54"),
    ("kh", "5", "5", "5"),
    ("mn", "66", "66", "66"),
    ("nm", "66", "66", "66"),
    ("oi", "0", "1", ""),
    ("oj", "0", "1", ""),
    ("oy", "0", "1", ""),
    ("pf", "7", "7", "7"),
    ("ph", "7", "7", "7"),
    ("sh", "4", "4", "4"),
    ("sc", "2", "4", "4"),
    ("st", "2", "43", "43"),
    ("sd", "2", "43", "43"),
    ("sz", "4", "4", "4"),
    ("th", "3", "3", "3"),
    ("ts", "4", "4", "4"),
    ("tc", "4", "4", "4"),
    ("tz", "4", "4", "4"),
    ("ui", "0", "1", ""),
    ("uj", "0", "1", ""),
    ("uy", "0", "1", ""),
    ("ue", "0", "1", ""),
    ("zd", "2", "43", "43"),
    ("zh", "4", "4", "4"),
    ("zs", "4", "4", "4"),
    // branching
    ("c", "5|4", "5|4", "5|4"),
    ("ch", "5|4", "5|4", "5|4"),
    ("ck", "5|45", "5|45", "5|45"),
    ("rs", "94|4", "94|4", "94|4"),
    ("rz", "94|4", "94|4", "94|4"),
    ("j", "1|4", "|4", "|4"),
];

/// Characters the rule table knows that must survive diacritic folding.
const KEPT_MARKED: [char; 4] = ['ą', 'ę', 'ţ', 'ț'];

type Codings = SmallVec<[&'static str; 2]>;

#[derive(Debug)]
struct DmRule {
    pattern: SmallVec<[char; 8]>,
    at_start: Codings,
    before_vowel: Codings,
    otherwise: Codings,
}

impl DmRule {
    fn parse(entry: &(&'static str, &'static str, &'static str, &'static str)) -> Self {
        let &(pattern, at_start, before_vowel, otherwise) = entry;
        let split = |codings: &'static str| -> Codings { codings.split('|').collect() };
        Self {
            pattern: pattern.chars().collect(),
            at_start: split(at_start),
            before_vowel: split(before_vowel),
            otherwise: split(otherwise),
        }
    }

    fn matches(&self, context: &[char]) -> bool {
        context.starts_with(&self.pattern)
    }

    fn codings(&self, context: &[char], at_start: bool) -> &Codings {
        if at_start {
            return &self.at_start;
        }
        match context.get(self.pattern.len()) {
            Some(&c) if is_vowel(c) => &self.before_vowel,
            _ => &self.otherwise,
        }
    }
}

/// Rules keyed by their first character, longest pattern first.
static RULES: Lazy<AHashMap<char, Vec<DmRule>>> = Lazy::new(|| {
    let mut rules: AHashMap<char, Vec<DmRule>> = AHashMap::new();
    for entry in DM_RULES {
        let rule = DmRule::parse(entry);
        if let Some(&first) = rule.pattern.first() {
            rules.entry(first).or_default().push(rule);
        }
    }
    for list in rules.values_mut() {
        list.sort_by(|a, b| b.pattern.len().cmp(&a.pattern.len()));
    }
    rules
});

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// One candidate code under construction.
#[derive(Debug, Clone, Default)]
struct Branch {
    code: String,
    last_coding: Option<&'static str>,
}

impl Branch {
    fn push(&mut self, coding: &'static str, force: bool) {
        let repeated = self.last_coding.is_some_and(|last| last.ends_with(coding));
        if (!repeated || force) && self.code.len() < DM_CODE_LENGTH {
            self.code.push_str(coding);
            self.code.truncate(DM_CODE_LENGTH);
        }
        self.last_coding = Some(coding);
    }

    fn finish(mut self) -> String {
        while self.code.len() < DM_CODE_LENGTH {
            self.code.push('0');
        }
        self.code
    }
}

/// Lowercase, drop whitespace, fold diacritics the table has no rule for.
fn cleanup(s: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(s.len());
    for c in s.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase) {
        match c {
            'ß' => out.push('s'),
            'æ' => out.push('a'),
            'ø' => out.push('o'),
            'ł' => out.push('l'),
            'đ' | 'ð' => out.push('d'),
            'þ' => out.push('b'),
            c if KEPT_MARKED.contains(&c) => out.push(c),
            c => out.extend(std::iter::once(c).nfkd().filter(|d| !is_combining_mark(*d))),
        }
    }
    out
}

/// Daitch-Mokotoff encoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaitchMokotoff;

impl DaitchMokotoff {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PhoneticEncoder for DaitchMokotoff {
    /// All codes joined by single spaces.
    fn encode(&self, s: &str) -> String {
        daitch_mokotoff(s).join(" ")
    }

    fn encode_all(&self, s: &str) -> Vec<String> {
        daitch_mokotoff(s)
    }

    fn name(&self) -> &'static str {
        "daitch_mokotoff"
    }
}

/// Every Daitch-Mokotoff code of `s`, in branch order.
///
/// Input without codable letters yields `["000000"]`.
///
/// # Example
/// ```
/// use fuzzycompare::phonetic::daitch_mokotoff::daitch_mokotoff;
///
/// assert_eq!(daitch_mokotoff("Worships"), vec!["794740"]);
/// assert_eq!(daitch_mokotoff("").len(), 1);
/// ```
#[must_use]
pub fn daitch_mokotoff(s: &str) -> Vec<String> {
    let input = cleanup(s);
    let mut branches = vec![Branch::default()];
    let mut last_char: Option<char> = None;
    let mut index = 0;

    while index < input.len() {
        let ch = input[index];
        let context = &input[index..];

        let Some(rule) = RULES
            .get(&ch)
            .and_then(|rules| rules.iter().find(|rule| rule.matches(context)))
        else {
            index += 1;
            continue;
        };

        let codings = rule.codings(context, last_char.is_none());
        let force = matches!((last_char, ch), (Some('m'), 'n') | (Some('n'), 'm'));

        let mut next: Vec<Branch> = Vec::with_capacity(branches.len() * codings.len());
        for branch in &branches {
            for &coding in codings {
                let mut forked = branch.clone();
                forked.push(coding, force);
                if !next.iter().any(|seen| seen.code == forked.code) {
                    next.push(forked);
                }
            }
        }
        branches = next;

        last_char = Some(ch);
        index += rule.pattern.len();
    }

    let mut codes: Vec<String> = Vec::with_capacity(branches.len());
    for code in branches.into_iter().map(Branch::finish) {
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    fn code_set(s: &str) -> AHashSet<String> {
        daitch_mokotoff(s).into_iter().collect()
    }

    #[test]
    fn test_single_branch() {
        assert_eq!(daitch_mokotoff("Worships"), vec!["794740"]);
        assert_eq!(daitch_mokotoff("Peters"), vec!["739400", "734000"]);
    }

    #[test]
    fn test_branching() {
        let expected: AHashSet<String> = ["566536", "466536", "566436", "466436"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(code_set("communication"), expected);
        assert_eq!(daitch_mokotoff("communication")[0], "566536");
    }

    #[test]
    fn test_empty_sentinel() {
        assert_eq!(daitch_mokotoff(""), vec!["000000"]);
        assert_eq!(daitch_mokotoff("  "), vec!["000000"]);
        assert_eq!(daitch_mokotoff("123"), vec!["000000"]);
    }

    #[test]
    fn test_adjacent_codes_collapse() {
        // doubled t codes once; a vowel between two t's lets both through
        assert_eq!(daitch_mokotoff("Otto"), vec!["030000"]);
        assert_eq!(daitch_mokotoff("Tata"), vec!["330000"]);
    }

    #[test]
    fn test_mn_pair_codes_both() {
        assert_eq!(daitch_mokotoff("Amna"), vec!["066000"]);
    }

    #[test]
    fn test_folding_and_whitespace() {
        assert_eq!(daitch_mokotoff("Müller"), daitch_mokotoff("Muller"));
        assert_eq!(daitch_mokotoff("Wor ships"), daitch_mokotoff("Worships"));
        assert_eq!(daitch_mokotoff("Strauß"), daitch_mokotoff("Strauss"));
    }

    #[test]
    fn test_codes_are_six_digits() {
        for name in ["Schwarzenegger", "Ab", "Jackson", "Mokotoff"] {
            for code in daitch_mokotoff(name) {
                assert_eq!(code.len(), DM_CODE_LENGTH);
                assert!(code.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn test_encoder_joins_codes() {
        let joined = DaitchMokotoff::new().encode("communication");
        assert_eq!(joined.split(' ').count(), 4);
    }
}
