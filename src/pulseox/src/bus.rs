use embedded_hal::i2c::{Error as _, I2c};

use crate::BusError;

/// Register-addressed access to a single device.
pub trait RegisterBus {
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), BusError>;
    fn read_block(&mut self, reg: u8, len: usize) -> Result<Vec<u8>, BusError>;
}

/// [`RegisterBus`] over an `embedded-hal` I2C bus at a fixed address.
pub struct I2cRegisterBus<T> {
    i2c: T,
    address: u8,
}

impl<T: I2c> I2cRegisterBus<T> {
    pub fn new(i2c: T, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }
}

impl<T: I2c> RegisterBus for I2cRegisterBus<T> {
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), BusError> {
        let address = self.address;
        self.i2c
            .write(address, &[reg, value])
            .map_err(|e| BusError::Io {
                address,
                kind: e.kind(),
            })
    }

    fn read_block(&mut self, reg: u8, len: usize) -> Result<Vec<u8>, BusError> {
        let address = self.address;
        let mut block = vec![0; len];
        self.i2c
            .write_read(address, &[reg], &mut block)
            .map_err(|e| BusError::Io {
                address,
                kind: e.kind(),
            })?;
        Ok(block)
    }
}
