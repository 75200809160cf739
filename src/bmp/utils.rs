//! Little-endian cursor over a borrowed byte slice.

use crate::error::BmpError;

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        let new_pos = self.pos.checked_add(n).ok_or(BmpError::UnexpectedEof)?;
        if new_pos > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        self.pos = new_pos;
        Ok(())
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        let end = self.pos.checked_add(N).ok_or(BmpError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(BmpError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(buf)
    }

    pub(crate) fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    pub(crate) fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    pub(crate) fn get_i32_le(&mut self) -> Result<i32, BmpError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }
}
