// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::problem::{
    builder::ProblemBuilder,
    equipment::{Equipment, EquipmentCode},
    err::ProblemLoaderError,
    prob::Problem,
};
use changeover_core::prelude::SetupTime;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// Loads a changeover instance from whitespace-separated text:
///
/// ```text
/// n
/// code_1 ... code_n
/// n x n setup-time matrix, row-major
/// ```
///
/// Diagonal entries are present in the file for readability but carry no
/// meaning (a sequence never transitions to the same equipment); they are
/// skipped on load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemLoader;

impl ProblemLoader {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn from_bufread<R: BufRead>(&self, mut br: R) -> Result<Problem<i64>, ProblemLoaderError> {
        let mut sc = Scanner::new(&mut br);
        let count = sc.next_i64()?;
        let n = usize::try_from(count).map_err(|_| ProblemLoaderError::InvalidCount(count))?;

        // No pre-reserve: the declared count is untrusted until the codes
        // and matrix have actually been read.
        let mut codes = Vec::new();
        for _ in 0..n {
            let code = EquipmentCode::new(sc.next_token()?);
            if codes.contains(&code) {
                return Err(ProblemLoaderError::DuplicateCode(code));
            }
            codes.push(code);
        }

        let mut builder = ProblemBuilder::new();
        builder.extend_equipment(codes.iter().cloned().map(Equipment::new));

        for i in 0..n {
            for j in 0..n {
                let minutes = sc.next_i64()?;
                if i == j {
                    continue;
                }
                builder.add_transition(
                    codes[i].clone(),
                    codes[j].clone(),
                    SetupTime::new(minutes),
                );
            }
        }

        Ok(builder.build()?)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Problem<i64>, ProblemLoaderError> {
        let file = File::open(path).map_err(ProblemLoaderError::Io)?;
        let br = BufReader::new(file);
        self.from_bufread(br)
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Problem<i64>, ProblemLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Problem<i64>, ProblemLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

#[derive(Debug)]
struct Scanner<R: BufRead> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    #[inline]
    fn fill_line(&mut self) -> Result<(), ProblemLoaderError> {
        self.buf.clear();
        self.pos = 0;
        let n = self
            .rdr
            .read_line(&mut self.buf)
            .map_err(ProblemLoaderError::Io)?;
        if n == 0 {
            return Err(ProblemLoaderError::UnexpectedEof);
        }
        Ok(())
    }

    #[inline]
    fn skip_ws(&mut self) -> Result<(), ProblemLoaderError> {
        loop {
            if self.pos >= self.buf.len() {
                self.fill_line()?;
                continue;
            }
            while self.pos < self.buf.len() && self.buf.as_bytes()[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos >= self.buf.len() {
                continue;
            }
            return Ok(());
        }
    }

    #[inline]
    fn next_token(&mut self) -> Result<&str, ProblemLoaderError> {
        self.skip_ws()?;
        let start = self.pos;
        while self.pos < self.buf.len() && !self.buf.as_bytes()[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Ok(&self.buf[start..self.pos])
    }

    #[inline]
    fn next_i64(&mut self) -> Result<i64, ProblemLoaderError> {
        let tok = self.next_token()?;
        tok.parse::<i64>().map_err(ProblemLoaderError::ParseInt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_OK: &str = r#"
        3
        A B C
        0  10 15
        20 0  35
        25 12 0
    "#;

    #[test]
    fn test_loads_minimal_instance() {
        let loader = ProblemLoader::new();
        let p = loader.from_str(SMALL_OK).unwrap();

        assert_eq!(p.equipment_len(), 3);
        // 3x3 minus the diagonal
        assert_eq!(p.matrix().len(), 6);

        let a = EquipmentCode::new("A");
        let c = EquipmentCode::new("C");
        assert_eq!(p.transition_cost(&a, &c).unwrap(), SetupTime::new(15));
        assert_eq!(p.transition_cost(&c, &a).unwrap(), SetupTime::new(25));
        // diagonal is skipped, not stored as zero
        assert!(p.transition_cost(&a, &a).is_err());
    }

    #[test]
    fn test_zero_equipment_loads_as_empty_problem() {
        let p = ProblemLoader::new().from_str("0\n").unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn test_duplicate_code_is_rejected() {
        let err = ProblemLoader::new()
            .from_str("2\nA A\n0 1\n1 0\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ProblemLoaderError::DuplicateCode(c) if c == EquipmentCode::new("A")
        ));
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let err = ProblemLoader::new().from_str("-1\n").unwrap_err();
        assert!(matches!(err, ProblemLoaderError::InvalidCount(-1)));
        assert_eq!(err.to_string(), "invalid equipment count: -1");
    }

    #[test]
    fn test_overdeclared_count_runs_out_of_tokens() {
        // A count far beyond the actual data must fail cleanly on EOF,
        // not reserve memory for the declared size up front.
        let err = ProblemLoader::new().from_str("1000000\nA\n").unwrap_err();
        assert!(matches!(err, ProblemLoaderError::UnexpectedEof));
    }

    #[test]
    fn test_truncated_matrix_is_eof() {
        let err = ProblemLoader::new().from_str("2\nA B\n0 1\n").unwrap_err();
        assert!(matches!(err, ProblemLoaderError::UnexpectedEof));
    }

    #[test]
    fn test_garbage_token_is_parse_error() {
        let err = ProblemLoader::new()
            .from_str("2\nA B\n0 x\n1 0\n")
            .unwrap_err();
        assert!(matches!(err, ProblemLoaderError::ParseInt(_)));
    }

    #[test]
    fn test_load_all_instances_from_workspace_root_instances_folder() {
        use std::path::{Path, PathBuf};

        // Find the nearest ancestor that contains an `instances/` directory.
        let mut dir: Option<PathBuf> = None;
        let mut cur: Option<&Path> = Some(Path::new(env!("CARGO_MANIFEST_DIR")));
        while let Some(p) = cur {
            let cand = p.join("instances");
            if cand.is_dir() {
                dir = Some(cand);
                break;
            }
            cur = p.parent();
        }
        let Some(dir) = dir else {
            return;
        };

        let loader = ProblemLoader::new();
        for entry in std::fs::read_dir(dir).unwrap().filter_map(|e| e.ok()) {
            if entry.path().extension().map(|x| x == "txt").unwrap_or(false) {
                let p = loader.from_path(entry.path()).unwrap();
                assert!(!p.is_empty());
                // every ordered pair of distinct codes must be present
                let n = p.equipment_len();
                assert_eq!(p.matrix().len(), n * (n - 1));
            }
        }
    }
}
