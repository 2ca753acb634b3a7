use thiserror::Error;

/// Rectangular pattern with row-major cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
}

impl Pattern {
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseRleError {
    #[error("missing `x = .., y = ..` header line")]
    MissingHeader,
    #[error("pattern size {width}x{height} is empty")]
    EmptySize { width: usize, height: usize },
    #[error("unexpected symbol {symbol:?} at byte {position}")]
    UnexpectedSymbol { symbol: char, position: usize },
    #[error("cells at byte {position} exceed the declared size")]
    OutOfBounds { position: usize },
    #[error("pattern size {width}x{height} is too large")]
    SizeTooLarge { width: usize, height: usize },
    #[error("number at byte {position} does not fit into usize")]
    NumberTooLarge { position: usize },
}

const MAX_PATTERN_CELLS: usize = 1 << 26;

fn parse_number(data: &[u8], i: &mut usize) -> Result<usize, ParseRleError> {
    let start = *i;
    let mut ans = 0usize;
    while *i < data.len() && data[*i].is_ascii_digit() {
        ans = ans
            .checked_mul(10)
            .and_then(|x| x.checked_add((data[*i] - b'0') as usize))
            .ok_or(ParseRleError::NumberTooLarge { position: start })?;
        *i += 1;
    }
    Ok(ans)
}

/// Parses `name = value` pairs of the header line, returning the declared size.
fn parse_header(line: &[u8]) -> Option<(usize, usize)> {
    let line = std::str::from_utf8(line).ok()?;
    let (mut width, mut height) = (None, None);
    for pair in line.split(',') {
        let (key, value) = pair.split_once('=')?;
        match key.trim() {
            "x" => width = value.trim().parse().ok(),
            "y" => height = value.trim().parse().ok(),
            _ => {}
        }
    }
    Some((width?, height?))
}

/// Parses a pattern in the RLE format.
///
/// Comment lines (`#...`) are skipped, the header gives the pattern size and
/// the rule part of the header is ignored.
pub fn parse_rle(data: &[u8]) -> Result<Pattern, ParseRleError> {
    let mut i = 0;
    // skipping comment and blank lines
    let header = loop {
        if i >= data.len() {
            return Err(ParseRleError::MissingHeader);
        }
        let end = data[i..]
            .iter()
            .position(|&c| c == b'\n')
            .map_or(data.len(), |p| i + p);
        let line = &data[i..end];
        i = (end + 1).min(data.len());
        match line.iter().copied().find(|c| !c.is_ascii_whitespace()) {
            None | Some(b'#') => continue,
            Some(_) => {}
        }
        break line;
    };
    let (width, height) = parse_header(header).ok_or(ParseRleError::MissingHeader)?;
    if width == 0 || height == 0 {
        return Err(ParseRleError::EmptySize { width, height });
    }
    if width.checked_mul(height).map_or(true, |n| n > MAX_PATTERN_CELLS) {
        return Err(ParseRleError::SizeTooLarge { width, height });
    }

    let mut cells = vec![false; width * height];
    // run-length encoded pattern data
    let (mut x, mut y) = (0usize, 0usize);
    while i < data.len() {
        let position = i;
        let cnt = if data[i].is_ascii_digit() {
            parse_number(data, &mut i)?
        } else {
            1
        };
        // a run count may be separated from its tag by a line break
        while data.get(i).is_some_and(|c| c.is_ascii_whitespace()) {
            i += 1;
        }
        let Some(&symbol) = data.get(i) else {
            break;
        };
        i += 1;
        match symbol {
            c if c.is_ascii_whitespace() => {}
            b'b' => x = x.saturating_add(cnt),
            b'o' => {
                if x.saturating_add(cnt) > width || y >= height {
                    return Err(ParseRleError::OutOfBounds { position });
                }
                cells[y * width + x..y * width + x + cnt].fill(true);
                x += cnt;
            }
            b'$' => (x, y) = (0, y.saturating_add(cnt)),
            b'!' => break,
            _ => {
                return Err(ParseRleError::UnexpectedSymbol {
                    symbol: char::from(symbol),
                    position: i - 1,
                })
            }
        }
    }
    Ok(Pattern {
        width,
        height,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLIDER: &[u8] = b"#N Glider\n#C A comment\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n";

    #[test]
    fn test_glider() {
        let pattern = parse_rle(GLIDER).unwrap();
        assert_eq!((pattern.width, pattern.height), (3, 3));
        #[rustfmt::skip]
        let expected = vec![
            false, true, false,
            false, false, true,
            true, true, true,
        ];
        assert_eq!(pattern.cells, expected);
        assert_eq!(pattern.population(), 5);
    }

    #[test]
    fn test_multiline_body_and_row_skips() {
        let pattern = parse_rle(b"x = 2, y = 4\no\n$2$\n2o!").unwrap();
        assert_eq!(pattern.cells, [true, false, false, false, false, false, true, true]);
    }

    #[test]
    fn test_count_split_from_tag() {
        let pattern = parse_rle(b"x = 3, y = 2\n2\no$3\r\no!").unwrap();
        assert_eq!(pattern.cells, [true, true, false, true, true, true]);
    }

    #[test]
    fn test_trailing_dead_cells_may_overflow() {
        // dead runs past the right edge are harmless
        let pattern = parse_rle(b"x = 3, y = 1\n5b!").unwrap();
        assert_eq!(pattern.population(), 0);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_rle(b"#C nothing\n"), Err(ParseRleError::MissingHeader));
        assert_eq!(parse_rle(b"bo$2bo!"), Err(ParseRleError::MissingHeader));
        assert_eq!(
            parse_rle(b"x = 0, y = 3\n!"),
            Err(ParseRleError::EmptySize {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            parse_rle(b"x = 2, y = 1\n3o!"),
            Err(ParseRleError::OutOfBounds { position: 13 })
        );
        assert_eq!(
            parse_rle(b"x = 100000, y = 100000\n!"),
            Err(ParseRleError::SizeTooLarge {
                width: 100000,
                height: 100000
            })
        );
        assert_eq!(
            parse_rle(b"x = 2, y = 1\nbz!"),
            Err(ParseRleError::UnexpectedSymbol {
                symbol: 'z',
                position: 14
            })
        );
    }
}
