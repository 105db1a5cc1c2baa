use crate::CHUNK_SIZE;

/// The padding value recorded in every shard for a secret of
/// `secret_len` bytes: `4 - len % 4`, so an exact multiple of 4 records 4.
pub fn padding_for(secret_len: usize) -> u8 {
    (CHUNK_SIZE - secret_len % CHUNK_SIZE) as u8
}

/// Splits `secret` into little-endian 32-bit chunks. A short final chunk is
/// zero-filled; an empty secret yields no chunks.
pub fn chunks_of(secret: &[u8]) -> Vec<u32> {
    secret
        .chunks(CHUNK_SIZE)
        .map(|chunk| {
            let mut bytes = [0u8; CHUNK_SIZE];
            bytes[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(bytes)
        })
        .collect()
}

/// Writes `chunks` back out little-endian and drops the trailing
/// `padding % 4` bytes.
pub fn assemble(chunks: &[u32], padding: u8) -> Vec<u8> {
    let mut secret: Vec<u8> = chunks.iter().flat_map(|chunk| chunk.to_le_bytes()).collect();
    let trim = (padding as usize % CHUNK_SIZE).min(secret.len());
    secret.truncate(secret.len() - trim);
    secret
}
