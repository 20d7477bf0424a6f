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

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
  /// Failure raised by configuration, validation or the provider client
  #[error(transparent)]
  Core(#[from] ctm_core::Error),

  #[error("CSV error: {0}")]
  Csv(String),

  #[error("IO error: {0}")]
  Io(String),
}

// Implement conversions manually
impl From<csv::Error> for PipelineError {
  fn from(err: csv::Error) -> Self {
    PipelineError::Csv(err.to_string())
  }
}

impl From<std::io::Error> for PipelineError {
  fn from(err: std::io::Error) -> Self {
    PipelineError::Io(err.to_string())
  }
}

impl PipelineError {
  /// Name of the failure class shown to the user
  pub fn class(&self) -> &'static str {
    match self {
      PipelineError::Core(err) => err.class(),
      PipelineError::Csv(_) => "ExportError",
      PipelineError::Io(_) => "ExportError",
    }
  }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
