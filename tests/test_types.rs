/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt::Debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use swf_codec::codes::bit_field::raw_to_fb;
use swf_codec::prelude::*;

/// Check that `value` encodes to `bytes` and that `bytes` decode to `value`.
fn check_encoding<T: Decode + Encode + PartialEq + Debug>(value: T, bytes: &[u8]) -> Result<()> {
    let mut buffer: Vec<u8> = vec![];
    let len = value.encode(&mut MemByteWriterVec::new(&mut buffer))?;
    assert_eq!(buffer, bytes, "{:?}", value);
    assert_eq!(len, bytes.len());
    assert_eq!(value.byte_size(), bytes.len());
    assert_eq!(T::decode(&mut MemByteReader::new(bytes))?, (value, bytes.len()));
    Ok(())
}

#[test]
fn test_rect() -> Result<()> {
    check_encoding(Rect::new(Twips(0), Twips(1), Twips(2), Twips(3)), &[24, 41, 128])?;
    check_encoding(
        Rect::new(Twips(234), Twips(191), Twips(32), Twips(108)),
        &[75, 169, 126, 32, 54, 0],
    )?;
    check_encoding(Rect::new(Twips(-1), Twips(0), Twips(-1), Twips(0)), &[13, 0])?;
    Ok(())
}

#[test]
fn test_rect_truncated() -> Result<()> {
    // Width 3: everything but the last field is available
    let (rect, len) = Rect::decode(&mut MemByteReader::new([24_u8, 41]))?;
    assert_eq!(rect, Rect::new(Twips(0), Twips(1), Twips(2), Twips(0)));
    assert_eq!(len, 2);

    let err = Rect::decode(&mut MemByteReader::new([24_u8])).unwrap_err();
    assert!(err.is_end_of_stream());
    assert_eq!(err.field_path(), ["Rect.Xmax"]);
    Ok(())
}

#[test]
fn test_matrix() -> Result<()> {
    check_encoding(
        Matrix::new(19.25, 4.5, 0.5, 0.125, Twips(12), Twips(-4)),
        &[217, 52, 0, 1, 32, 0, 49, 64, 0, 8, 0, 37, 103, 0],
    )?;
    check_encoding(
        Matrix::new(219.0, 512.5, 1020.5, 8190.125, Twips(124), Twips(-4192)),
        &[
            236, 109, 128, 0, 32, 8, 0, 15, 131, 252, 128, 0, 127, 248, 128, 2, 224, 31, 47, 160,
        ],
    )?;
    check_encoding(Matrix::IDENTITY, &[0])?;
    Ok(())
}

#[test]
fn test_matrix_field_widths() {
    let m = Matrix::new(19.25, 4.5, 0.5, 0.125, Twips(12), Twips(-4));
    assert_eq!(m.field_widths(), [Some(22), Some(17), Some(5)]);
    assert_eq!(Matrix::IDENTITY.field_widths(), [None, None, None]);
    assert_eq!(
        Matrix::translate(Twips(0), Twips(0)).field_widths(),
        [None, None, None]
    );
}

#[test]
fn test_cxform() -> Result<()> {
    check_encoding(
        CxForm::new(156, 247, 213, 197, 79, 108),
        &[229, 56, 247, 106, 177, 73, 230, 192],
    )?;
    check_encoding(
        CxForm::new(195, 173, 154, 85, 159, 230),
        &[229, 134, 173, 77, 21, 83, 238, 96],
    )?;
    check_encoding(CxForm::new(1, 3, 14, 2, 9, 30), &[216, 16, 206, 8, 151, 128])?;
    Ok(())
}

#[test]
fn test_cxform_with_alpha() -> Result<()> {
    check_encoding(
        CxFormWithAlpha::new(156, 247, 213, 128, 197, 79, 108, 154),
        &[229, 56, 247, 106, 160, 24, 164, 243, 98, 104],
    )?;
    check_encoding(
        CxFormWithAlpha::new(195, 173, 154, 215, 85, 159, 230, 14),
        &[229, 134, 173, 77, 53, 202, 169, 247, 48, 56],
    )?;
    check_encoding(CxFormWithAlpha::IDENTITY, &[0])?;
    Ok(())
}

/// Encode `value` and return a bit reader over the encoded bytes.
fn encoded<T: Encode>(value: &T) -> Result<BitReader<MemByteReader<Vec<u8>>>> {
    let mut buffer: Vec<u8> = vec![];
    value.encode(&mut MemByteWriterVec::new(&mut buffer))?;
    Ok(BitReader::new(MemByteReader::new(buffer)))
}

/// Return a random value whose `SB` width is at most `max_width`.
fn random_sb(rng: &mut SmallRng, max_width: u32) -> i32 {
    rng.random::<i32>() >> rng.random_range(32 - max_width..32)
}

/// Check that `width` is the largest of `lens`, and thus that no smaller
/// width holds every field.
fn check_minimal(width: usize, lens: &[usize]) {
    assert!(lens.iter().all(|&len| len <= width), "{width} {lens:?}");
    assert!(lens.contains(&width), "{width} {lens:?}");
}

#[test]
fn test_rect_minimal_width() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..1000 {
        let mut coord = || Twips(random_sb(&mut rng, 31));
        let rect = Rect::new(coord(), coord(), coord(), coord());
        let width = encoded(&rect)?.read_ub(5)? as usize;
        let lens = [rect.x_min, rect.x_max, rect.y_min, rect.y_max].map(|t| len_sb(t.0));
        check_minimal(width, &lens);
    }
    Ok(())
}

/// Read the widths of the groups of an encoded matrix.
fn matrix_widths(m: &Matrix) -> Result<[Option<usize>; 3]> {
    let mut bits = encoded(m)?;
    let mut widths = [None; 3];
    for width in &mut widths {
        if bits.read_bits(1)? == 1 {
            let w = bits.read_ub(5)? as usize;
            bits.read_bits(2 * w)?;
            *width = Some(w);
        }
    }
    Ok(widths)
}

#[test]
fn test_matrix_minimal_widths() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..1000 {
        let mut fixed = || raw_to_fb(random_sb(&mut rng, 31));
        let (sx, sy, r0, r1) = (fixed(), fixed(), fixed(), fixed());
        let (tx, ty) = (Twips(random_sb(&mut rng, 31)), Twips(random_sb(&mut rng, 31)));
        let m = Matrix::new(sx, sy, r0, r1, tx, ty);

        let [scale, rotate, translate] = matrix_widths(&m)?;
        if (sx, sy) != (1.0, 1.0) {
            check_minimal(scale.unwrap(), &[len_fb(sx), len_fb(sy)]);
        } else {
            assert_eq!(scale, None);
        }
        if (r0, r1) != (0.0, 0.0) {
            check_minimal(rotate.unwrap(), &[len_fb(r0), len_fb(r1)]);
        } else {
            assert_eq!(rotate, None);
        }
        if (tx, ty) != (Twips(0), Twips(0)) {
            check_minimal(translate.unwrap(), &[len_sb(tx.0), len_sb(ty.0)]);
        } else {
            assert_eq!(translate, None);
        }

        // Dropping a group leaves the widths of the others unchanged
        let no_scale = Matrix::new(1.0, 1.0, r0, r1, tx, ty);
        assert_eq!(matrix_widths(&no_scale)?, [None, rotate, translate]);
        let no_rotate = Matrix::new(sx, sy, 0.0, 0.0, tx, ty);
        assert_eq!(matrix_widths(&no_rotate)?, [scale, None, translate]);
        let no_translate = Matrix::new(sx, sy, r0, r1, Twips(0), Twips(0));
        assert_eq!(matrix_widths(&no_translate)?, [scale, rotate, None]);
    }
    Ok(())
}

/// Read the presence flags and the width of an encoded color transform.
fn cxform_header<T: Encode>(c: &T) -> Result<(bool, bool, usize)> {
    let mut bits = encoded(c)?;
    let has_add = bits.read_bits(1)? == 1;
    let has_mult = bits.read_bits(1)? == 1;
    Ok((has_add, has_mult, bits.read_ub(4)? as usize))
}

/// Check the header of an encoded color transform against its terms.
fn check_cxform_header(header: (bool, bool, usize), mult: &[i16], add: &[i16]) {
    let has_mult = mult.iter().any(|&t| t != DEFAULT_MULT);
    let has_add = add.iter().any(|&t| t != DEFAULT_ADD);
    assert_eq!((header.0, header.1), (has_add, has_mult));
    let lens: Vec<usize> = [(has_mult, mult), (has_add, add)]
        .into_iter()
        .filter(|&(present, _)| present)
        .flat_map(|(_, terms)| terms.iter().map(|&t| len_sb(t as i32)))
        .collect();
    if lens.is_empty() {
        assert_eq!(header.2, 0);
    } else {
        check_minimal(header.2, &lens);
    }
}

#[test]
fn test_cxform_minimal_width() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..1000 {
        let mut term = || random_sb(&mut rng, 15) as i16;
        let mut mult = [term(), term(), term(), term()];
        let mut add = [term(), term(), term(), term()];
        match rng.random_range(0..4) {
            0 => mult = [DEFAULT_MULT; 4],
            1 => add = [DEFAULT_ADD; 4],
            _ => {}
        }
        let [rm, gm, bm, am] = mult;
        let [ra, ga, ba, aa] = add;

        let c = CxForm::new(rm, gm, bm, ra, ga, ba);
        check_cxform_header(cxform_header(&c)?, &mult[..3], &add[..3]);
        let c = CxFormWithAlpha::new(rm, gm, bm, am, ra, ga, ba, aa);
        check_cxform_header(cxform_header(&c)?, &mult, &add);
    }

    // Absent multiply terms do not count, even though 256 needs 10 bits
    let c = CxForm::new(256, 256, 256, 1, -2, 3);
    assert_eq!(cxform_header(&c)?, (true, false, 3));
    let c = CxFormWithAlpha::new(256, 256, 256, 256, 0, 0, 0, -1);
    assert_eq!(cxform_header(&c)?, (true, false, 1));
    assert_eq!(cxform_header(&CxForm::IDENTITY)?, (false, false, 0));
    Ok(())
}

#[test]
fn test_string_and_language() -> Result<()> {
    let mut bytes = "hello, 世界".as_bytes().to_vec();
    bytes.push(0);
    check_encoding(SwfString::from("hello, 世界"), &bytes)?;
    check_encoding(SwfString::default(), &[0])?;

    let mut reader = MemByteReader::new([3_u8, 4, 5, 1, 2, 0, 6]);
    let codes: Vec<LanguageCode> = (0..5)
        .map(|_| LanguageCode::decode(&mut reader).map(|(code, _)| code))
        .collect::<Result<_>>()?;
    assert_eq!(
        codes,
        [
            LanguageCode::Korean,
            LanguageCode::SimplifiedChinese,
            LanguageCode::TraditionalChinese,
            LanguageCode::Latin,
            LanguageCode::Japanese,
        ]
    );
    for bad in [0, 6] {
        assert!(matches!(
            LanguageCode::decode(&mut reader),
            Err(Error::InvalidLanguageCode(code)) if code == bad
        ));
    }
    Ok(())
}

#[test]
fn test_colors() -> Result<()> {
    check_encoding(Rgb::new(1, 2, 3), &[1, 2, 3])?;
    check_encoding(Rgba::new(1, 2, 3, 4), &[1, 2, 3, 4])?;
    check_encoding(Argb::new(4, 1, 2, 3), &[4, 1, 2, 3])?;
    Ok(())
}

#[test]
fn test_display() {
    assert_eq!(Twips(250).to_string(), "12 10/20");
    assert_eq!(Twips(-20).to_string(), "-1");
    assert_eq!(
        Rect::new(Twips(0), Twips(200), Twips(-20), Twips(40)).to_string(),
        "(0, -1), (10, -1), (10, 2), (0, 2)"
    );
    assert_eq!(
        Matrix::translate(Twips(100), Twips(-30)).to_string(),
        "MATRIX: [ [ 1.000000, 0.000000 ], [ 0.000000, 1.000000 ], [ 5, -1 10/20 ] ]"
    );
    assert_eq!(
        Rgba::new(255, 128, 0, 64).to_string(),
        "Red: 255, Green: 128, Blue: 0, Alpha: 64"
    );
    assert_eq!(Fixed(1.5).to_string(), "1.500000");
    assert_eq!(LanguageCode::Japanese.to_string(), "Japanese");
}

#[test]
fn test_record() -> Result<()> {
    let frame = Rect::new(Twips(0), Twips(11000), Twips(0), Twips(8000));
    let rate = Fixed8(24.0);
    let count = 10_u16;
    let transform = Matrix::translate(Twips::from_pixels(10), Twips::from_pixels(20));
    let name = SwfString::from("main");

    let fields: [&dyn EncodeField; 5] = [&frame, &rate, &count, &transform, &name];
    let mut buffer: Vec<u8> = vec![];
    let written = write_all(&mut MemByteWriterVec::new(&mut buffer), &fields)?;
    assert_eq!(written, buffer.len());
    assert_eq!(written, total_size(&fields));

    let mut decoded = (
        Rect::default(),
        Fixed8::default(),
        0_u16,
        Matrix::IDENTITY,
        SwfString::default(),
    );
    let read = read_all(
        &mut MemByteReader::new(&buffer),
        &mut [
            &mut decoded.0,
            &mut decoded.1,
            &mut decoded.2,
            &mut decoded.3,
            &mut decoded.4,
        ],
    )?;
    assert_eq!(read, written);
    assert_eq!(decoded, (frame, rate, count, transform, name));
    Ok(())
}

#[test]
fn test_io_backends() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(0);
    let rects: Vec<Rect> = (0..1000)
        .map(|_| {
            let mut coord = || Twips(rng.random::<i32>() >> rng.random_range(2..32_u32));
            Rect::new(coord(), coord(), coord(), coord())
        })
        .collect();

    let mut writer = ByteAdapter::new(std::io::Cursor::new(Vec::new()));
    let mut expected = 0;
    for rect in &rects {
        expected += rect.encode(&mut writer)?;
    }
    assert_eq!(writer.bytes_written(), expected as u64);

    let bytes = writer.into_inner().into_inner();
    let mut reader = ByteAdapter::new(std::io::BufReader::new(&bytes[..]));
    for rect in &rects {
        assert_eq!(&Rect::decode(&mut reader)?.0, rect);
    }
    assert!(reader.read_byte().unwrap_err().is_end_of_stream());
    Ok(())
}

/// A destination accepting `capacity` bytes, one call at a time, and then
/// failing.
struct FailingWriter {
    accepted: Vec<u8>,
    capacity: usize,
}

impl std::io::Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = buf.len().min(self.capacity - self.accepted.len());
        if n == 0 {
            return Err(std::io::Error::other("device full"));
        }
        self.accepted.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_io_partial_write() -> Result<()> {
    let mut writer = ByteAdapter::new(FailingWriter {
        accepted: vec![],
        capacity: 2,
    });
    let err = writer.write_all(&[1, 2, 3, 4]).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "{err:?}");
    assert_eq!(writer.bytes_written(), 2);
    assert_eq!(writer.into_inner().accepted, [1, 2]);

    // A composite cut short counts the bytes that made it through
    let mut writer = ByteAdapter::new(FailingWriter {
        accepted: vec![],
        capacity: 4,
    });
    let rect = Rect::new(Twips(0), Twips(11000), Twips(0), Twips(8000));
    assert!(rect.encode(&mut writer).is_err());
    assert_eq!(writer.bytes_written(), 4);
    Ok(())
}

#[test]
fn test_serde() {
    let m = Matrix::new(2.0, 0.5, 0.25, 3.0, Twips(200), Twips(-40));
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(serde_json::from_str::<Matrix>(&json).unwrap(), m);

    let c = CxFormWithAlpha::new(1, 2, 3, 4, 5, 6, 7, 8);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(serde_json::from_str::<CxFormWithAlpha>(&json).unwrap(), c);

    let json = serde_json::to_string(&LanguageCode::Korean).unwrap();
    assert_eq!(json, "\"Korean\"");
}
