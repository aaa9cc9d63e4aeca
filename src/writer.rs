//! Serialize sample buffers into PCM or RIFF/WAVE byte streams, and read
//! them back for verification.
//!
//! See: https://ccrma.stanford.edu/courses/422/projects/WaveFormat/

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::errors::{Result, SweepError};

/// Format of an uncompressed PCM stream: channel layout, sample rate and
/// bit depth. Only drives header fields; the payload is always the `i16`
/// samples handed to the writer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WavFormat {
    pub channels: u16,
    /// In Hz, eg `44_100`
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Single-channel 16-bit format at `sample_rate` Hz.
    pub fn mono(sample_rate: u32) -> WavFormat {
        WavFormat {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Bytes of audio consumed per second of playback.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.channels) * u32::from(self.bits_per_sample) / 8
    }

    /// Bytes per sample frame across all channels.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bits_per_sample / 8
    }
}

/// A parsed WAV file: its format and PCM content.
#[derive(Clone, Debug, PartialEq)]
pub struct Wave {
    pub format: WavFormat,
    pub pcm: Vec<i16>,
}

/// Writes raw little-endian samples with no framing.
pub fn write_pcm<W: Write>(writer: &mut W, samples: &[i16]) -> Result<()> {
    for &sample in samples {
        writer.write_i16::<LittleEndian>(sample)?;
    }
    Ok(())
}

/// Writes raw little-endian samples to a file, creating or overwriting it.
pub fn write_pcm_file<P: AsRef<Path>>(path: P, samples: &[i16]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_pcm(&mut writer, samples)
}

/// Writes a complete RIFF/WAVE container: the canonical 44-byte header
/// followed by the samples in sequence order. All multi-byte header fields
/// are little-endian. An empty sample slice produces a minimal valid
/// container with a zero-length data chunk.
///
/// ```
/// use std::io::Cursor;
///
/// use sweepgen::writer::{write_wav, WavFormat};
///
/// let mut out = Cursor::new(Vec::new());
/// write_wav(&mut out, WavFormat::mono(44_100), &[0i16, 128, -128]).unwrap();
/// assert_eq!(out.get_ref().len(), 44 + 6);
/// ```
pub fn write_wav<W: Write>(writer: &mut W, format: WavFormat, samples: &[i16]) -> Result<()> {
    let data_size = samples.len() as u32 * u32::from(format.block_align());
    let chunk_size = 36 + data_size;

    writer.write_u32::<BigEndian>(0x5249_4646)?; // ChunkID, RIFF
    writer.write_u32::<LittleEndian>(chunk_size)?; // ChunkSize
    writer.write_u32::<BigEndian>(0x5741_5645)?; // Format, WAVE

    writer.write_u32::<BigEndian>(0x666d_7420)?; // Subchunk1ID, fmt
    writer.write_u32::<LittleEndian>(16)?; // Subchunk1Size, 16 for PCM
    writer.write_u16::<LittleEndian>(1)?; // AudioFormat, PCM = 1 (linear quantization)
    writer.write_u16::<LittleEndian>(format.channels)?; // NumChannels
    writer.write_u32::<LittleEndian>(format.sample_rate)?; // SampleRate
    writer.write_u32::<LittleEndian>(format.byte_rate())?; // ByteRate
    writer.write_u16::<LittleEndian>(format.block_align())?; // BlockAlign
    writer.write_u16::<LittleEndian>(format.bits_per_sample)?; // BitsPerSample

    writer.write_u32::<BigEndian>(0x6461_7461)?; // Subchunk2ID, data
    writer.write_u32::<LittleEndian>(data_size)?; // Subchunk2Size, number of bytes in the data

    for &sample in samples {
        writer.write_i16::<LittleEndian>(sample)?;
    }

    Ok(())
}

/// Writes a RIFF/WAVE container to a file, creating or overwriting it.
/// A failed write may leave a truncated file behind; callers wanting
/// atomicity should write to a temporary path and rename.
pub fn write_wav_file<P: AsRef<Path>>(path: P, format: WavFormat, samples: &[i16]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_wav(&mut writer, format, samples)
}

fn expect_tag<R: Read>(reader: &mut R, expected: u32, name: &str) -> Result<()> {
    if reader.read_u32::<BigEndian>()? != expected {
        return Err(SweepError::Parse(format!("missing {} tag", name)));
    }
    Ok(())
}

/// Parses a WAV stream in the layout `write_wav` emits. Only plain 16-bit
/// PCM with the canonical 44-byte header is accepted; anything else is a
/// parse error.
pub fn read_wav<R: Read>(reader: &mut R) -> Result<Wave> {
    expect_tag(reader, 0x5249_4646, "RIFF")?;
    let _chunk_size = reader.read_u32::<LittleEndian>()?;
    expect_tag(reader, 0x5741_5645, "WAVE")?;

    expect_tag(reader, 0x666d_7420, "fmt ")?;
    if reader.read_u32::<LittleEndian>()? != 16 {
        return Err(SweepError::Parse("unexpected fmt chunk size".to_string()));
    }
    if reader.read_u16::<LittleEndian>()? != 1 {
        return Err(SweepError::Parse("not uncompressed PCM".to_string()));
    }
    let channels = reader.read_u16::<LittleEndian>()?;
    let sample_rate = reader.read_u32::<LittleEndian>()?;
    let _byte_rate = reader.read_u32::<LittleEndian>()?;
    let _block_align = reader.read_u16::<LittleEndian>()?;
    let bits_per_sample = reader.read_u16::<LittleEndian>()?;
    if bits_per_sample != 16 {
        return Err(SweepError::Parse(format!(
            "unsupported bit depth: {}",
            bits_per_sample
        )));
    }

    expect_tag(reader, 0x6461_7461, "data")?;
    let data_size = reader.read_u32::<LittleEndian>()?;

    let mut pcm: Vec<i16> = Vec::with_capacity(data_size as usize / 2);
    for _ in 0..data_size / 2 {
        pcm.push(reader.read_i16::<LittleEndian>()?);
    }

    Ok(Wave {
        format: WavFormat {
            channels,
            sample_rate,
            bits_per_sample,
        },
        pcm,
    })
}

/// Parses a WAV file in the layout `write_wav` emits.
pub fn read_wav_file<P: AsRef<Path>>(path: P) -> Result<Wave> {
    let mut reader = BufReader::new(File::open(path)?);
    read_wav(&mut reader)
}
