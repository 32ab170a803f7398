use crate::storage::tuple::{tuple_width, Tuple};
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::{self, Write};

/// Reinterprets a byte buffer as consecutive `N`-ary tuples, in buffer
/// order. The buffer length must be a multiple of the tuple width; any
/// trailing partial tuple is ignored.
pub fn deserialize_tuples<E: ByteOrder, const N: usize>(
    bytes: &[u8],
) -> impl Iterator<Item = Tuple<N>> + '_ {
    bytes.chunks_exact(tuple_width::<N>()).map(|chunk| {
        let mut tuple = [0; N];
        E::read_i32_into(chunk, &mut tuple);
        tuple
    })
}

pub fn serialize_tuple<E: ByteOrder, W: Write, const N: usize>(
    writer: &mut W,
    tuple: &Tuple<N>,
) -> io::Result<()> {
    for value in tuple {
        writer.write_i32::<E>(*value)?;
    }
    Ok(())
}
