//! Simulated MPU-6050 sitting behind a primitive two-wire bus.

#![allow(dead_code)]

use mpu6050_soft_i2c::interface::soft_i2c::{Acknowledge, BusTransport};

/// Primitive observed on the bus, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Start,
    Restart,
    Stop,
    Sent(u8),
    Received(u8),
    Ack,
    Nak,
}

/// Error returned by the simulated transport when a receive is set to time out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusTimeout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    AwaitAddress,
    AwaitRegister,
    AwaitData,
    Transmitting,
    Ignoring,
}

/// Register-file device model.
///
/// Writes land at the register pointer and auto-increment; reads stream from
/// the pointer and auto-increment. The device NACKs any address byte that is
/// not its own.
pub struct SimulatedBus {
    pub registers: [u8; 256],
    pub events: Vec<Event>,
    /// Every `(register, value)` stored by a write, in order.
    pub writes: Vec<(u8, u8)>,
    /// Pretend the device is absent: every address byte is NACKed.
    pub absent: bool,
    /// Make every receive fail with [`BusTimeout`].
    pub receive_times_out: bool,
    address: u8,
    state: State,
    pointer: u8,
}

impl SimulatedBus {
    pub fn new(address: u8) -> Self {
        let mut registers = [0u8; 256];
        registers[0x6B] = 0x40;
        registers[0x75] = 0x68;

        Self {
            registers,
            events: Vec::new(),
            writes: Vec::new(),
            absent: false,
            receive_times_out: false,
            address,
            state: State::Idle,
            pointer: 0,
        }
    }

    pub fn mpu6050() -> Self {
        Self::new(0x68)
    }

    pub fn count(&self, event: Event) -> usize {
        self.events.iter().filter(|seen| **seen == event).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.writes.clear();
    }

    /// Number of bytes clocked in from the device.
    pub fn received(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Received(_)))
            .count()
    }
}

impl BusTransport for SimulatedBus {
    type Error = BusTimeout;

    fn start(&mut self) -> Result<(), BusTimeout> {
        self.events.push(Event::Start);
        self.state = State::AwaitAddress;
        Ok(())
    }

    fn restart(&mut self) -> Result<(), BusTimeout> {
        self.events.push(Event::Restart);
        self.state = State::AwaitAddress;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), BusTimeout> {
        self.events.push(Event::Stop);
        self.state = State::Idle;
        Ok(())
    }

    fn send(&mut self, byte: u8) -> Result<Acknowledge, BusTimeout> {
        self.events.push(Event::Sent(byte));

        let (next, ack) = match self.state {
            State::AwaitAddress if self.absent || byte >> 1 != self.address => {
                (State::Ignoring, Acknowledge::Nack)
            }
            State::AwaitAddress if byte & 1 == 1 => (State::Transmitting, Acknowledge::Ack),
            State::AwaitAddress => (State::AwaitRegister, Acknowledge::Ack),
            State::AwaitRegister => {
                self.pointer = byte;
                (State::AwaitData, Acknowledge::Ack)
            }
            State::AwaitData => {
                self.registers[self.pointer as usize] = byte;
                self.writes.push((self.pointer, byte));
                self.pointer = self.pointer.wrapping_add(1);
                (State::AwaitData, Acknowledge::Ack)
            }
            State::Idle | State::Transmitting | State::Ignoring => (self.state, Acknowledge::Nack),
        };

        self.state = next;
        Ok(ack)
    }

    fn receive(&mut self) -> Result<u8, BusTimeout> {
        if self.receive_times_out {
            return Err(BusTimeout);
        }

        let byte = if self.state == State::Transmitting {
            let value = self.registers[self.pointer as usize];
            self.pointer = self.pointer.wrapping_add(1);
            value
        } else {
            // Nobody drives the line.
            0xFF
        };

        self.events.push(Event::Received(byte));
        Ok(byte)
    }

    fn ack(&mut self) -> Result<(), BusTimeout> {
        self.events.push(Event::Ack);
        Ok(())
    }

    fn nak(&mut self) -> Result<(), BusTimeout> {
        self.events.push(Event::Nak);
        Ok(())
    }
}
