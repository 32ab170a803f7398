//! Storage configuration and relation file I/O.
//!
//! A relation file is a flat run of 4-byte signed integers with no header:
//! `len / (4 * arity)` tuples of `arity` integers each, so the arity has to
//! be supplied by the caller.

use crate::storage::error::{Result, StorageError};
use crate::storage::relation::Relation;
use crate::storage::tuple::tuple_width;
use crate::storage::tuple_serde::{deserialize_tuples, serialize_tuple};
use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Byte order of the integers in a relation file.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Endianness {
    #[default]
    Native,
    Little,
    Big,
}

#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    /// Byte order used for both reading and writing.
    pub endianness: Endianness,
    /// Create missing parent directories before saving.
    pub create_parent_dirs: bool,
}

impl StorageConfig {
    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    pub fn with_parent_dirs(mut self, create_parent_dirs: bool) -> Self {
        self.create_parent_dirs = create_parent_dirs;
        self
    }

    /// Reads the whole file and collects its tuples into a fresh relation.
    /// Repeated tuples in the file collapse into one.
    pub fn load<P: AsRef<Path>, const N: usize>(&self, path: P) -> Result<Relation<N>> {
        let path = path.as_ref();
        let bytes = read_relation_file(path, N)?;

        let relation: Relation<N> = match self.endianness {
            Endianness::Native => decode::<NativeEndian, N>(&bytes),
            Endianness::Little => decode::<LittleEndian, N>(&bytes),
            Endianness::Big => decode::<BigEndian, N>(&bytes),
        };

        let read = bytes.len() / tuple_width::<N>();
        tracing::debug!(
            "Loaded {} tuples of arity {} from {:?} ({} bytes, {} duplicates dropped)",
            relation.tuple_count(),
            N,
            path,
            bytes.len(),
            read - relation.tuple_count()
        );
        Ok(relation)
    }

    /// Writes the relation in ascending tuple order, replacing any existing
    /// file at `path`.
    pub fn save<P: AsRef<Path>, const N: usize>(&self, path: P, relation: &Relation<N>) -> Result<()> {
        let path = path.as_ref();
        if self.create_parent_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| StorageError::Open {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = File::create(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        let written = match self.endianness {
            Endianness::Native => encode::<NativeEndian, _, N>(&mut writer, relation),
            Endianness::Little => encode::<LittleEndian, _, N>(&mut writer, relation),
            Endianness::Big => encode::<BigEndian, _, N>(&mut writer, relation),
        };
        written
            .and_then(|()| writer.flush())
            .map_err(|source| StorageError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            "Saved {} tuples of arity {} to {:?}",
            relation.tuple_count(),
            N,
            path
        );
        Ok(())
    }
}

fn read_relation_file(path: &Path, arity: usize) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|source| StorageError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let len = file
        .metadata()
        .map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    let width = (arity * std::mem::size_of::<i32>()) as u64;
    if len % width != 0 {
        return Err(StorageError::Misaligned {
            path: path.to_path_buf(),
            len,
            arity,
        });
    }

    let out_of_memory = || StorageError::OutOfMemory {
        path: path.to_path_buf(),
        bytes: len,
    };
    let size = usize::try_from(len).map_err(|_| out_of_memory())?;
    let mut bytes = Vec::new();
    bytes.try_reserve_exact(size).map_err(|_| out_of_memory())?;
    bytes.resize(size, 0);

    file.read_exact(&mut bytes)
        .map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(bytes)
}

fn decode<E: ByteOrder, const N: usize>(bytes: &[u8]) -> Relation<N> {
    deserialize_tuples::<E, N>(bytes).collect()
}

fn encode<E: ByteOrder, W: Write, const N: usize>(
    writer: &mut W,
    relation: &Relation<N>,
) -> std::io::Result<()> {
    for tuple in relation {
        serialize_tuple::<E, _, N>(writer, tuple)?;
    }
    Ok(())
}
