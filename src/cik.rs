use std::collections::HashMap;

/// Company name to CIK lookup built from EDGAR's `cik-lookup-data.txt`.
///
/// Each line reads `NAME:CIK:`. Names are matched exactly, as EDGAR spells them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CikDirectory {
    by_name: HashMap<String, String>,
}

impl CikDirectory {
    #[must_use]
    pub fn parse(data: &str) -> Self {
        let mut by_name = HashMap::new();
        let mut skipped = 0_usize;
        for line in data.lines() {
            match parse_line(line) {
                Some((name, cik)) => {
                    by_name.insert(name.to_string(), cik.to_string());
                }
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, "ignored malformed CIK lookup lines");
        }
        Self { by_name }
    }

    #[must_use]
    pub fn get(&self, company_name: &str) -> Option<&str> {
        self.by_name.get(company_name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Splits at the first `:`; the CIK is the remainder without its trailing `:`.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (name, rest) = line.split_once(':')?;
    let cik = rest.strip_suffix(':').unwrap_or(rest);
    if name.is_empty() || cik.is_empty() {
        return None;
    }
    Some((name, cik))
}

#[cfg(test)]
mod tests {
    use super::{CikDirectory, parse_line};

    const SAMPLE: &str = "APPLE COMPUTER INC:0000320193:\nNVIDIA CORP:0001045810:\nTESLA, INC.:0001318605:\n\ngarbage\n";

    #[test]
    fn parses_name_and_cik() {
        assert_eq!(
            parse_line("AMAZON COM INC:0001018724:"),
            Some(("AMAZON COM INC", "0001018724"))
        );
        assert_eq!(parse_line("no separator"), None);
    }

    #[test]
    fn looks_up_exact_names() {
        let directory = CikDirectory::parse(SAMPLE);
        assert_eq!(directory.len(), 3);
        assert_eq!(directory.get("TESLA, INC."), Some("0001318605"));
        assert_eq!(directory.get("NVIDIA CORP"), Some("0001045810"));
        assert_eq!(directory.get("nvidia corp"), None);
    }
}
