pub mod models;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use rand::{Rng, RngExt};

use crate::models::{MatrixModel, Result};

pub const VALUE_MAX: u32 = 100;

pub const ROWS_DEFAULT: usize = 5;
pub const COLS_DEFAULT: usize = 10;

pub const FILE_NAME: &str = "matrix.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub values: Vec<Vec<u32>>,
    pub rows: usize,
    pub cols: usize,
}

impl Matrix {
    pub fn generate<F>(rows: usize, cols: usize, tick_func: F) -> Self
    where
        F: FnMut(),
    {
        Self::generate_with(&mut rand::rng(), rows, cols, tick_func)
    }

    pub fn generate_with<R, F>(rng: &mut R, rows: usize, cols: usize, mut tick_func: F) -> Self
    where
        R: Rng + ?Sized,
        F: FnMut(),
    {
        let mut values = Vec::with_capacity(rows);
        for _ in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for _ in 0..cols {
                row.push(rng.random_range(0..=VALUE_MAX));
            }
            values.push(row);
            tick_func();
        }

        Self { values, rows, cols }
    }

    /// The target directory must already exist; intermediate directories
    /// are not created.
    pub fn save(self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(FILE_NAME);

        let mut writer = BufWriter::new(File::create(&path)?);
        MatrixModel::from(self).serialize(&mut writer)?;
        writer.flush()?;

        Ok(path)
    }
}
