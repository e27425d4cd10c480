mod common;

use common::{BusTimeout, Event, SimulatedBus};
use mpu6050_soft_i2c::interface::RegisterInterface;
use mpu6050_soft_i2c::interface::soft_i2c::SoftI2cInterface;
use mpu6050_soft_i2c::params::SlaveAddress;
use mpu6050_soft_i2c::{Error, Nack, NackPhase};

fn interface() -> SoftI2cInterface<SimulatedBus> {
    SoftI2cInterface::new(SimulatedBus::mpu6050(), SlaveAddress::Ad0Low)
}

#[test]
fn block_read_streams_bytes_in_register_order() {
    for count in 1..=14usize {
        let mut iface = interface();
        for (offset, value) in (0x3Bu8..).zip(0x10u8..).take(count) {
            iface.bus_mut().registers[offset as usize] = value;
        }

        let mut buffer = vec![0u8; count];
        iface.read_many(0x3B, &mut buffer).unwrap();

        let expected: Vec<u8> = (0x10u8..).take(count).collect();
        assert_eq!(buffer, expected, "count = {count}");

        let bus = iface.release();
        assert_eq!(bus.count(Event::Ack), count - 1, "count = {count}");
        assert_eq!(bus.count(Event::Nak), 1, "count = {count}");
        assert_eq!(bus.received(), count);
        assert_eq!(&bus.events[bus.events.len() - 2..], &[Event::Nak, Event::Stop]);
    }
}

#[test]
fn block_read_frames_write_phase_then_repeated_start() {
    let mut iface = interface();
    iface.bus_mut().registers[0x1B] = 0x18;
    iface.bus_mut().registers[0x1C] = 0x08;

    let mut buffer = [0u8; 2];
    iface.read_many(0x1B, &mut buffer).unwrap();
    assert_eq!(buffer, [0x18, 0x08]);

    assert_eq!(
        iface.release().events,
        vec![
            Event::Start,
            Event::Sent(0xD0),
            Event::Sent(0x1B),
            Event::Restart,
            Event::Sent(0xD1),
            Event::Received(0x18),
            Event::Ack,
            Event::Received(0x08),
            Event::Nak,
            Event::Stop,
        ]
    );
}

#[test]
fn single_byte_read_is_never_acknowledged() {
    let mut iface = interface();

    assert_eq!(iface.read_register(0x75).unwrap(), 0x68);

    let bus = iface.release();
    assert_eq!(bus.count(Event::Ack), 0);
    assert_eq!(
        &bus.events[bus.events.len() - 3..],
        &[Event::Received(0x68), Event::Nak, Event::Stop]
    );
}

#[test]
fn register_write_is_one_framed_transaction() {
    let mut iface = interface();

    iface.write_register(0x6B, 0x01).unwrap();

    let bus = iface.release();
    assert_eq!(bus.registers[0x6B], 0x01);
    assert_eq!(
        bus.events,
        vec![
            Event::Start,
            Event::Sent(0xD0),
            Event::Sent(0x6B),
            Event::Sent(0x01),
            Event::Stop,
        ]
    );
}

#[test]
fn absent_device_aborts_reads_and_writes_alike() {
    let mut iface = interface();
    iface.bus_mut().absent = true;

    let expected = |register| {
        Error::UnexpectedAcknowledgment(Nack {
            phase: NackPhase::DeviceAddressWrite,
            register,
        })
    };

    let mut buffer = [0xEEu8; 14];
    assert_eq!(iface.read_many(0x3B, &mut buffer), Err(expected(0x3B)));
    assert_eq!(iface.bus_mut().events, vec![Event::Start, Event::Sent(0xD0), Event::Stop]);

    iface.bus_mut().clear();
    assert_eq!(iface.write_register(0x6B, 0x00), Err(expected(0x6B)));

    let bus = iface.release();
    assert_eq!(bus.events, vec![Event::Start, Event::Sent(0xD0), Event::Stop]);
    assert!(bus.writes.is_empty());
    assert_eq!(bus.registers[0x6B], 0x40);
}

#[test]
fn wrong_address_is_not_acknowledged() {
    let mut iface = SoftI2cInterface::new(SimulatedBus::mpu6050(), SlaveAddress::Ad0High);

    let err = iface.read_register(0x75).unwrap_err();
    assert_eq!(
        err,
        Error::UnexpectedAcknowledgment(Nack {
            phase: NackPhase::DeviceAddressWrite,
            register: 0x75,
        })
    );
    assert_eq!(iface.release().events, vec![Event::Start, Event::Sent(0xD2), Event::Stop]);
}

#[test]
fn zero_length_read_touches_nothing() {
    let mut iface = interface();

    iface.read_many(0x3B, &mut []).unwrap();

    assert!(iface.release().events.is_empty());
}

#[test]
fn transport_timeout_surfaces_as_bus_error_and_releases_the_bus() {
    let mut iface = interface();
    iface.bus_mut().receive_times_out = true;

    assert_eq!(iface.read_register(0x75), Err(Error::Bus(BusTimeout)));

    let bus = iface.release();
    assert_eq!(&bus.events[bus.events.len() - 2..], &[Event::Nak, Event::Stop]);
    assert_eq!(bus.count(Event::Stop), 1);
}
