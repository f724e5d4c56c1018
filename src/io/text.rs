//! Plain text form of vectors and matrices.
//!
//! A vector is written as its length on one line followed by one line of
//! space separated values.  A square matrix is written as its size `n`
//! followed by `n` lines of `n` values, and a general grid as its row count
//! and column count on separate lines followed by the rows.  Values use the
//! shortest `Display` form that parses back to the same float.
//!
//! On read, tokens are whitespace separated and line breaks carry no meaning.

use crate::algebra::{AlgebraError, FloatT, Grid, NumericVector, Sequence, ShapedMatrix, SquareMatrix};
use itertools::Itertools;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Error type returned when reading the text form
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unexpected end of input")]
    UnexpectedEof,
    #[error("Unparsable token \"{0}\"")]
    BadToken(String),
    #[error("Negative dimension {0}")]
    NegativeSize(i64),
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

/// Reading and writing of the plain text form
pub trait TextReadWrite: Sized {
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()>;
    fn read_text<R: BufRead>(input: &mut R) -> Result<Self, ReadError>;

    fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // writes into a Vec<u8> do not fail
        let _ = self.write_text(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn from_text(s: &str) -> Result<Self, ReadError> {
        Self::read_text(&mut s.as_bytes())
    }
}

// whitespace separated token stream over a buffered reader
struct TokenReader<'a, R: BufRead> {
    reader: &'a mut R,
}

impl<'a, R: BufRead> TokenReader<'a, R> {
    fn new(reader: &'a mut R) -> Self {
        Self { reader }
    }

    fn next_token(&mut self) -> Result<String, ReadError> {
        let mut token = Vec::new();
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &b in buf {
                used += 1;
                if !b.is_ascii_whitespace() {
                    token.push(b);
                } else if !token.is_empty() {
                    done = true;
                    break;
                }
            }
            self.reader.consume(used);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Err(ReadError::UnexpectedEof);
        }
        String::from_utf8(token)
            .map_err(|e| ReadError::BadToken(String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }

    fn next_value<V: FromStr>(&mut self) -> Result<V, ReadError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| ReadError::BadToken(token))
    }

    fn next_dim(&mut self) -> Result<usize, ReadError> {
        let token = self.next_token()?;
        let dim: i64 = token
            .parse()
            .map_err(|_| ReadError::BadToken(token.clone()))?;
        if dim < 0 {
            return Err(ReadError::NegativeSize(dim));
        }
        usize::try_from(dim).map_err(|_| ReadError::BadToken(token))
    }

    fn next_values<V: FromStr>(&mut self, count: usize) -> Result<Vec<V>, ReadError> {
        (0..count).map(|_| self.next_value()).collect()
    }
}

fn write_row<W: Write, T: Display>(out: &mut W, row: &[T]) -> std::io::Result<()> {
    writeln!(out, "{}", row.iter().join(" "))
}

fn write_rows<W: Write, T: Display>(out: &mut W, g: &Grid<T>) -> std::io::Result<()> {
    for i in 0..g.nrows() {
        write_row(out, g.row_slice(i))?;
    }
    Ok(())
}

impl<T> TextReadWrite for Sequence<T>
where
    T: Display + FromStr,
{
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.len())?;
        write_row(out, self.as_slice())
    }

    fn read_text<R: BufRead>(input: &mut R) -> Result<Self, ReadError> {
        let mut tokens = TokenReader::new(input);
        let len = tokens.next_dim()?;
        Ok(Sequence::from(tokens.next_values(len)?))
    }
}

impl<T> TextReadWrite for Grid<T>
where
    T: Display + FromStr,
{
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.nrows())?;
        writeln!(out, "{}", self.ncols())?;
        write_rows(out, self)
    }

    fn read_text<R: BufRead>(input: &mut R) -> Result<Self, ReadError> {
        let mut tokens = TokenReader::new(input);
        let rows = tokens.next_dim()?;
        let cols = tokens.next_dim()?;
        let count = rows.checked_mul(cols).ok_or(AlgebraError::InvalidSize)?;
        Ok(Grid::from_vec(rows, cols, tokens.next_values(count)?)?)
    }
}

impl<T> TextReadWrite for NumericVector<T>
where
    T: FloatT + FromStr,
{
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        self.as_sequence().write_text(out)
    }

    fn read_text<R: BufRead>(input: &mut R) -> Result<Self, ReadError> {
        Ok(NumericVector::from(Sequence::<T>::read_text(input)?))
    }
}

impl<T> TextReadWrite for SquareMatrix<T>
where
    T: FloatT + FromStr,
{
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.size())?;
        write_rows(out, self.as_grid())
    }

    fn read_text<R: BufRead>(input: &mut R) -> Result<Self, ReadError> {
        let mut tokens = TokenReader::new(input);
        let n = tokens.next_dim()?;
        let count = n.checked_mul(n).ok_or(AlgebraError::InvalidSize)?;
        let grid = Grid::from_vec(n, n, tokens.next_values(count)?)?;
        Ok(SquareMatrix::try_from(grid)?)
    }
}
