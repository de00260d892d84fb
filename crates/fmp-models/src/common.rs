/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Types shared by several fmpcloud responses

use serde::{Deserialize, Serialize};

/// A value the API sends either as a JSON number or as a string such as
/// `"1.25"` or `"(+1.25%)"`, depending on endpoint and vintage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
  /// Plain JSON number
  Number(f64),
  /// Number rendered as text
  Text(String),
}

impl Numeric {
  /// Numeric value, stripping sign decorations and percent signs from text
  pub fn as_f64(&self) -> Option<f64> {
    match self {
      Numeric::Number(n) => Some(*n),
      Numeric::Text(s) => {
        let cleaned: String =
          s.chars().filter(|c| !matches!(c, '(' | ')' | '%' | '+' | ' ' | ',')).collect();
        cleaned.parse().ok()
      }
    }
  }
}

impl std::fmt::Display for Numeric {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Numeric::Number(n) => write!(f, "{}", n),
      Numeric::Text(s) => write!(f, "{}", s),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_numeric_deserializes_both_forms() {
    let values: Vec<Numeric> = serde_json::from_str(r#"[1.5, "2.25", "(+3.10%)", "-0.52%"]"#).unwrap();
    assert_eq!(values[0], Numeric::Number(1.5));
    assert_eq!(values[1], Numeric::Text("2.25".to_string()));
    assert_eq!(values[1].as_f64(), Some(2.25));
    assert_eq!(values[2].as_f64(), Some(3.10));
    assert_eq!(values[3].as_f64(), Some(-0.52));
  }

  #[test]
  fn test_numeric_unparseable_text() {
    assert_eq!(Numeric::Text("n/a".to_string()).as_f64(), None);
  }
}
