// End-to-end with the real zstd codec: stock decoders must skip the seek
// table, and the table must locate every chunk.

use seekable_core::{
    compression::{CompressionError, ZstdCompressor},
    constants::SEEKABLE_TAG,
    encode_chunked,
    seek_table::decode_seek_table,
    skippable::{parse_skippable_frame, SkippableFrameView},
    utils::compute_checksum,
    Encoder,
};

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 31) % 251) as u8).collect()
}

fn split_index(stream: &[u8], chunks: usize) -> (&[u8], SkippableFrameView<'_>) {
    let index_len = 8 + 12 * chunks + 9;
    let (data, index) = stream.split_at(stream.len() - index_len);
    (data, parse_skippable_frame(index).unwrap())
}

#[test]
fn stock_decoder_skips_seek_table() {
    let data = sample(10_000);
    let mut enc = Encoder::zstd(3).unwrap();
    let stream = encode_chunked(&mut enc, &data, 1024).unwrap();

    let decoded = zstd::stream::decode_all(&stream[..]).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn seek_table_locates_every_chunk() {
    let data = sample(5_000);
    let chunk_size = 1_000;

    let mut enc = Encoder::zstd(5).unwrap();
    let stream = encode_chunked(&mut enc, &data, chunk_size).unwrap();

    let (frames, index) = split_index(&stream, 5);
    assert_eq!(index.tag, SEEKABLE_TAG);

    let table = decode_seek_table(index.payload).unwrap();
    assert_eq!(table.entries.len(), 5);
    assert_eq!(table.total_decompressed(), data.len() as u64);
    assert_eq!(table.total_compressed(), frames.len() as u64);

    // Decode the chunks back to front, each on its own.
    let mut offsets = Vec::new();
    let mut off = 0usize;
    for e in &table.entries {
        offsets.push(off);
        off += e.compressed_size as usize;
    }
    for (i, e) in table.entries.iter().enumerate().rev() {
        let start = offsets[i];
        let frame = &frames[start..start + e.compressed_size as usize];
        let chunk = zstd::bulk::decompress(frame, e.decompressed_size as usize).unwrap();

        assert_eq!(chunk, &data[i * chunk_size..(i + 1) * chunk_size]);
        assert_eq!(e.checksum, compute_checksum(&chunk));
    }
}

#[test]
fn empty_input_yields_table_only() {
    let mut enc = Encoder::zstd(3).unwrap();
    let stream = encode_chunked(&mut enc, &[], 64).unwrap();

    assert_eq!(stream.len(), 8 + 9);
    let table = decode_seek_table(parse_skippable_frame(&stream).unwrap().payload).unwrap();
    assert!(table.entries.is_empty());
    assert!(table.footer.has_checksums());
}

#[test]
fn zero_chunk_size_is_rejected() {
    let mut enc = Encoder::zstd(3).unwrap();
    assert!(encode_chunked(&mut enc, b"data", 0).is_err());
    assert!(!enc.is_closed());
}

#[test]
fn dictionary_compressor_round_trips() {
    let dict = b"seekable seekable seekable dictionary content".to_vec();
    let codec = ZstdCompressor::new(3, Some(&dict)).unwrap();
    let mut enc = Encoder::new(Box::new(codec));

    let chunk = b"seekable dictionary content seekable".to_vec();
    let frame = enc.encode(&chunk).unwrap();

    let mut dec = zstd::bulk::Decompressor::with_dictionary(&dict).unwrap();
    assert_eq!(dec.decompress(&frame, chunk.len()).unwrap(), chunk);
}

#[test]
fn zstd_level_out_of_range() {
    assert!(matches!(
        ZstdCompressor::new(0, None),
        Err(CompressionError::InvalidLevel { level: 0, .. })
    ));
    assert!(ZstdCompressor::new(23, None).is_err());
    assert_eq!(ZstdCompressor::with_default_level().unwrap().level(), 3);
}
