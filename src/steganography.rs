use crate::constants::{B_BIT, CHANNEL_MASK, G_BIT, R_BIT, TERMINATOR};
use image::{Rgb, RgbImage};
use std::iter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StegoError {
    #[error(
        "The message needs {required} pixels (payload plus terminator) but the image only provides {available}."
    )]
    Capacity { required: u64, available: u64 },

    #[error("Reached the end of the pixel data without finding a terminator.")]
    UnterminatedMessage,
}

pub fn capacity(img: &RgbImage) -> u64 {
    u64::from(img.width()) * u64::from(img.height())
}

pub fn encode(img: &mut RgbImage, message: &[u8]) -> Result<(), StegoError> {
    let available = capacity(img);
    let required = message.len() as u64 + 1;
    if required > available {
        return Err(StegoError::Capacity {
            required,
            available,
        });
    }

    let width = u64::from(img.width());

    for (i, &byte) in message.iter().chain(iter::once(&TERMINATOR)).enumerate() {
        let x = (i as u64 % width) as u32;
        let y = (i as u64 / width) as u32;
        let Rgb([r, g, b]) = *img.get_pixel(x, y);

        img.put_pixel(
            x,
            y,
            Rgb([
                (r & CHANNEL_MASK) | ((byte >> R_BIT) & 1),
                (g & CHANNEL_MASK) | ((byte >> G_BIT) & 1),
                (b & CHANNEL_MASK) | ((byte >> B_BIT) & 1),
            ]),
        );
    }

    Ok(())
}

pub fn decode(img: &RgbImage) -> Result<String, StegoError> {
    let mut message = String::new();

    for &Rgb([r, g, b]) in img.pixels() {
        let byte = ((r & 1) << R_BIT) | ((g & 1) << G_BIT) | ((b & 1) << B_BIT);

        if byte == TERMINATOR {
            return Ok(message);
        }

        message.push(char::from(byte));
    }

    Err(StegoError::UnterminatedMessage)
}
