use crate::error::DrillResult;
use crate::stroke::Outline;
use std::cmp::Ordering;
use std::io::Read;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillItem {
    pub word: String,
    pub outline: Outline,
}

impl DrillItem {
    pub fn new(word: &str, outline: &str) -> Self {
        Self {
            word: word.trim().to_string(),
            outline: Outline::parse(outline),
        }
    }
}

/// Reads `word<TAB>STROKE/STROKE` lines. Blank or single-column lines are skipped.
pub fn parse_drill<R: Read>(reader: R) -> DrillResult<Vec<DrillItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut items = Vec::new();
    let mut skipped = 0;

    for result in rdr.records() {
        let rec = result?;
        if rec.len() < 2 || rec[0].trim().is_empty() {
            skipped += 1;
            continue;
        }
        items.push(DrillItem::new(&rec[0], &rec[1]));
    }

    debug!("Parsed {} drill items ({} lines skipped)", items.len(), skipped);
    Ok(items)
}

pub fn parse_drill_str(content: &str) -> DrillResult<Vec<DrillItem>> {
    parse_drill(content.as_bytes())
}

/// Orders names with embedded numbers numerically: `lesson2` < `lesson10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut xs = a.chars().peekable();
    let mut ys = b.chars().peekable();

    loop {
        match (xs.peek().copied(), ys.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let nx = take_digits(&mut xs);
                let ny = take_digits(&mut ys);
                let ord = compare_digit_runs(&nx, &ny);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = x.to_lowercase().cmp(y.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                xs.next();
                ys.next();
            }
        }
    }
}

pub fn sort_drill_names<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}

fn take_digits<I: Iterator<Item = char>>(it: &mut std::iter::Peekable<I>) -> String {
    let mut run = String::new();
    while let Some(&c) = it.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        it.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
