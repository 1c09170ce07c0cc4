//! Register-file I2C fake for driver tests

use core::convert::Infallible;
use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};

/// In-memory register file behind the blocking `I2c` trait
///
/// A write's first byte selects the register; remaining bytes store from
/// there. Reads continue from the selected register, auto-incrementing.
/// In `st` mode the top bit of the register address (the ST multi-byte
/// convention) is stripped before addressing.
pub struct FakeBus {
    pub regs: [u8; 256],
    strip_msb: bool,
}

impl FakeBus {
    /// Fake for ST sensors (0x80 auto-increment bit on register addresses)
    pub fn st() -> Self {
        Self {
            regs: [0; 256],
            strip_msb: true,
        }
    }

    /// Fake with flat 8-bit register addressing
    pub fn flat() -> Self {
        Self {
            regs: [0; 256],
            strip_msb: false,
        }
    }

    fn index(&self, reg: u8) -> usize {
        if self.strip_msb {
            (reg & 0x7F) as usize
        } else {
            reg as usize
        }
    }
}

impl ErrorType for FakeBus {
    type Error = Infallible;
}

impl I2c<SevenBitAddress> for FakeBus {
    fn transaction(
        &mut self,
        _address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut ptr = 0usize;
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    if let Some((&reg, data)) = bytes.split_first() {
                        ptr = self.index(reg);
                        for (i, &b) in data.iter().enumerate() {
                            self.regs[(ptr + i) % 256] = b;
                        }
                    }
                }
                Operation::Read(buf) => {
                    for b in buf.iter_mut() {
                        *b = self.regs[ptr % 256];
                        ptr += 1;
                    }
                }
            }
        }
        Ok(())
    }
}
