pub use std::io::{self, Error, ErrorKind, Result};

use {
    crate::{Matrix, VALUE_MAX},
    std::str::FromStr,
};

#[derive(Debug)]
pub struct RowModel(pub Vec<u32>);

impl ToString for RowModel {
    fn to_string(&self) -> String {
        self.0
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl FromStr for RowModel {
    type Err = Error;

    // A blank line is an empty row, not an error.
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split_whitespace()
            .map(|value| {
                let value = value.parse::<u32>().map_err(|_| {
                    Error::new(
                        ErrorKind::InvalidData,
                        "field \"value\" expected type: <integer>",
                    )
                })?;
                if value > VALUE_MAX {
                    return Err(Error::new(
                        ErrorKind::InvalidData,
                        format!("value {value} is out of range 0..={VALUE_MAX}"),
                    ));
                }
                Ok(value)
            })
            .collect::<Result<Vec<u32>>>()?;

        Ok(Self(values))
    }
}

#[derive(Debug)]
pub struct MatrixModel(Vec<RowModel>);

impl Into<Matrix> for MatrixModel {
    fn into(self) -> Matrix {
        let values: Vec<Vec<u32>> = self.0.into_iter().map(|row| row.0).collect();
        let rows = values.len();
        let cols = values.first().map(|row| row.len()).unwrap_or(0);

        Matrix { values, rows, cols }
    }
}

impl From<Matrix> for MatrixModel {
    fn from(m: Matrix) -> Self {
        MatrixModel(m.values.into_iter().map(RowModel).collect())
    }
}

impl MatrixModel {
    pub fn serialize<W>(self, writer: &mut W) -> Result<()>
    where
        W: io::Write,
    {
        for row in self.0 {
            writer.write_all(row.to_string().as_bytes())?;
            writer.write_all(b"\n")?;
        }

        Ok(())
    }

    pub fn deserialize<R>(reader: &mut R) -> Result<Self>
    where
        R: io::Read,
    {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;

        let rows = buf
            .lines()
            .map(RowModel::from_str)
            .collect::<Result<Vec<RowModel>>>()?;

        Ok(Self(rows))
    }
}
