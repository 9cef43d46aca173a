// src/uart/ports.rs

//! USART instances and selector dispatch

use super::backend::{MmioBackend, Register, UsartHardware};
use super::constants::{PORT_COUNT, RXC, RXEN, TXEN, UCSZ0, UCSZ1, UDRE, UPM0, UPM1, USBS};
use super::error::UartError;
use super::io::SerialIo;
use super::line::{self, LineBuffer};
use crate::config::{F_CPU, LineConfig, Parity, StopBits};
use crate::mmio::BitField;
use crate::terminal;

/// Supported USART instances, tagged with their selector value.
///
/// Selector 1 (USART1) is deliberately absent.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortId {
    Usart0 = 0,
    Usart2 = 2,
    Usart3 = 3,
}

impl PortId {
    pub const ALL: [PortId; PORT_COUNT] = [PortId::Usart0, PortId::Usart2, PortId::Usart3];

    pub const fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            0 => Some(PortId::Usart0),
            2 => Some(PortId::Usart2),
            3 => Some(PortId::Usart3),
            _ => None,
        }
    }

    pub const fn selector(self) -> u8 {
        self as u8
    }

    const fn slot(self) -> usize {
        match self {
            PortId::Usart0 => 0,
            PortId::Usart2 => 1,
            PortId::Usart3 => 2,
        }
    }
}

impl TryFrom<u8> for PortId {
    type Error = UartError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        PortId::from_selector(selector).ok_or(UartError::UnsupportedPort(selector))
    }
}

/// UBRR value for `baud_rate` at `clock_hz`: `clock / (16 * baud) - 1`.
///
/// Truncating 32-bit arithmetic narrowed to 16 bits. A zero baud rate or
/// one above `clock / 16` wraps to `0xFFFF`.
pub const fn baud_divisor(clock_hz: u32, baud_rate: u32) -> u16 {
    let quotient = match clock_hz.checked_div(16u32.wrapping_mul(baud_rate)) {
        Some(quotient) => quotient,
        None => 0,
    };
    quotient.wrapping_sub(1) as u16
}

/// UCSRnC value for a line format.
pub fn frame_format(config: &LineConfig) -> u8 {
    let mut format = 0u8;
    format.set_bit_if(UCSZ1, config.data_bits == 8);
    format.set_bit_if(UCSZ0, config.data_bits >= 8);
    match config.parity {
        Parity::Odd => {
            format.set_bit(UPM1);
            format.set_bit(UPM0);
        }
        Parity::Even => format.set_bit(UPM1),
        Parity::None => {}
    }
    format.set_bit_if(USBS, config.stop_bits == StopBits::Two);
    format
}

/// One USART instance and its stored parity mode
#[derive(Debug)]
pub struct Usart<B> {
    hw: B,
    parity: Parity,
}

impl<B> Usart<B> {
    pub const fn new(hw: B) -> Self {
        Self {
            hw,
            parity: Parity::None,
        }
    }

    /// Parity recorded by the last `configure`.
    ///
    /// The record is normalized: raw codes other than 1 and 2 read back as
    /// `Parity::None`, not as the code that was passed in.
    pub fn parity(&self) -> Parity {
        self.parity
    }

    pub fn hardware(&self) -> &B {
        &self.hw
    }

    pub fn hardware_mut(&mut self) -> &mut B {
        &mut self.hw
    }
}

impl<B: UsartHardware> Usart<B> {
    /// Program baud rate, enables and frame format.
    pub fn configure(&mut self, clock_hz: u32, config: &LineConfig) {
        let divisor = baud_divisor(clock_hz, config.baud_rate);
        self.parity = config.parity;

        self.hw.write(Register::BaudHigh, (divisor >> 8) as u8);
        self.hw.write(Register::BaudLow, divisor as u8);

        let mut control = 0u8;
        control.set_bit(RXEN);
        control.set_bit(TXEN);
        self.hw.write(Register::ControlB, control);

        self.hw.write(Register::ControlC, frame_format(config));
    }

    /// Spin until the data register is empty, then load `byte`.
    pub fn transmit(&mut self, byte: u8) {
        while !self.hw.read(Register::StatusA).is_set(UDRE) {
            core::hint::spin_loop();
        }
        self.hw.write(Register::Data, byte);
    }

    pub fn is_receive_complete(&mut self) -> bool {
        self.hw.read(Register::StatusA).is_set(RXC)
    }

    /// Spin until a byte has arrived, then take it.
    pub fn receive(&mut self) -> u8 {
        while !self.is_receive_complete() {
            core::hint::spin_loop();
        }
        self.hw.read(Register::Data)
    }
}

impl<B: UsartHardware> SerialIo for Usart<B> {
    #[inline]
    fn write_byte(&mut self, byte: u8) {
        self.transmit(byte)
    }

    #[inline]
    fn is_available(&mut self) -> bool {
        self.is_receive_complete()
    }

    #[inline]
    fn read_byte(&mut self) -> u8 {
        self.receive()
    }
}

/// The supported USART instances plus the clock they are timed from.
///
/// Every selector-taking method follows the same rules: an unsupported
/// selector makes configuration and output a no-op, makes `is_available`
/// report `false`, and makes blocking reads spin forever.
#[derive(Debug)]
pub struct UartPorts<B> {
    ports: [Usart<B>; PORT_COUNT],
    clock_hz: u32,
}

impl<B> UartPorts<B> {
    pub const fn new(usart0: B, usart2: B, usart3: B) -> Self {
        Self {
            ports: [Usart::new(usart0), Usart::new(usart2), Usart::new(usart3)],
            clock_hz: F_CPU,
        }
    }

    /// Time the baud divisor from a clock other than `F_CPU`.
    pub fn with_clock(mut self, clock_hz: u32) -> Self {
        self.clock_hz = clock_hz;
        self
    }

    pub fn clock_hz(&self) -> u32 {
        self.clock_hz
    }

    pub fn port(&self, id: PortId) -> &Usart<B> {
        &self.ports[id.slot()]
    }

    pub fn port_mut(&mut self, id: PortId) -> &mut Usart<B> {
        &mut self.ports[id.slot()]
    }

    pub fn hardware(&self, id: PortId) -> &B {
        self.port(id).hardware()
    }

    pub fn hardware_mut(&mut self, id: PortId) -> &mut B {
        self.port_mut(id).hardware_mut()
    }

    /// Stored parity of `id`, normalized as described on [`Usart::parity`].
    pub fn parity(&self, id: PortId) -> Parity {
        self.port(id).parity()
    }
}

impl UartPorts<MmioBackend> {
    /// USART0, USART2 and USART3 of an ATmega2560.
    ///
    /// # Safety
    ///
    /// Must be called at most once; the returned value owns the register
    /// blocks.
    pub const unsafe fn atmega2560() -> Self {
        unsafe {
            Self::new(
                MmioBackend::usart0(),
                MmioBackend::usart2(),
                MmioBackend::usart3(),
            )
        }
    }
}

impl<B: UsartHardware> UartPorts<B> {
    /// View of one selector as a [`SerialIo`] device.
    pub fn select(&mut self, selector: u8) -> Selected<'_, B> {
        let port = match PortId::from_selector(selector) {
            Some(id) => Some(&mut self.ports[id.slot()]),
            None => None,
        };
        Selected { selector, port }
    }

    pub fn configure(&mut self, id: PortId, config: &LineConfig) {
        let clock_hz = self.clock_hz;
        self.port_mut(id).configure(clock_hz, config);
    }

    /// Setup from raw codes: parity 0 none, 1 odd, 2 even; stop bits 1 or 2.
    pub fn initialize(
        &mut self,
        selector: u8,
        baud_rate: u32,
        data_bits: u8,
        parity: u8,
        stop_bits: u8,
    ) {
        if let Some(id) = PortId::from_selector(selector) {
            let config = LineConfig::new(
                baud_rate,
                data_bits,
                Parity::from_raw(parity),
                StopBits::from_raw(stop_bits),
            );
            self.configure(id, &config);
        }
    }

    pub fn write_byte(&mut self, selector: u8, byte: u8) {
        self.select(selector).write_byte(byte)
    }

    pub fn write_string<T: AsRef<[u8]> + ?Sized>(&mut self, selector: u8, text: &T) {
        self.select(selector).write_string(text.as_ref())
    }

    pub fn is_available(&mut self, selector: u8) -> bool {
        self.select(selector).is_available()
    }

    /// Never returns for an unsupported selector.
    pub fn read_byte(&mut self, selector: u8) -> u8 {
        self.select(selector).read_byte()
    }

    /// Never returns for an unsupported selector.
    pub fn read_line(&mut self, selector: u8, buffer: &mut LineBuffer) -> usize {
        line::read_line(&mut self.select(selector), buffer)
    }

    pub fn clear_screen(&mut self, selector: u8) {
        terminal::clear_screen(&mut self.select(selector))
    }

    /// Fails only on a color index outside the table.
    pub fn set_color(&mut self, selector: u8, color_index: u8) -> Result<(), UartError> {
        terminal::set_color(&mut self.select(selector), color_index)
    }

    pub fn gotoxy(&mut self, selector: u8, x: u8, y: u8) {
        terminal::gotoxy(&mut self.select(selector), x, y)
    }
}

/// A selector resolved against [`UartPorts`]
#[derive(Debug)]
pub struct Selected<'a, B> {
    selector: u8,
    port: Option<&'a mut Usart<B>>,
}

impl<B> Selected<'_, B> {
    pub fn selector(&self) -> u8 {
        self.selector
    }

    pub fn is_supported(&self) -> bool {
        self.port.is_some()
    }
}

impl<B: UsartHardware> SerialIo for Selected<'_, B> {
    fn write_byte(&mut self, byte: u8) {
        if let Some(port) = self.port.as_deref_mut() {
            port.transmit(byte);
        }
    }

    fn is_available(&mut self) -> bool {
        self.port
            .as_deref_mut()
            .is_some_and(|port| port.is_receive_complete())
    }

    fn read_byte(&mut self) -> u8 {
        match self.port.as_deref_mut() {
            Some(port) => port.receive(),
            None => spin_forever(),
        }
    }
}

/// Nothing will ever arrive on an unsupported selector.
fn spin_forever() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uart::sim::SimulatedUsart;

    fn sim_ports() -> UartPorts<SimulatedUsart> {
        UartPorts::new(
            SimulatedUsart::new(),
            SimulatedUsart::new(),
            SimulatedUsart::new(),
        )
    }

    #[test]
    fn test_baud_divisor() {
        assert_eq!(baud_divisor(16_000_000, 9600), 103);
        assert_eq!(baud_divisor(16_000_000, 115_200), 7);
        assert_eq!(baud_divisor(16_000_000, 57_600), 16);
        assert_eq!(baud_divisor(8_000_000, 9600), 51);
    }

    #[test]
    fn test_baud_divisor_degenerate_rates_wrap() {
        assert_eq!(baud_divisor(16_000_000, 0), 0xFFFF);
        assert_eq!(baud_divisor(16_000_000, 2_000_000), 0xFFFF);
    }

    #[test]
    fn test_port_id_selectors() {
        assert_eq!(PortId::try_from(0), Ok(PortId::Usart0));
        assert_eq!(PortId::try_from(2), Ok(PortId::Usart2));
        assert_eq!(PortId::try_from(3), Ok(PortId::Usart3));
        assert_eq!(PortId::try_from(1), Err(UartError::UnsupportedPort(1)));
        assert_eq!(PortId::try_from(4), Err(UartError::UnsupportedPort(4)));
        for id in PortId::ALL {
            assert_eq!(PortId::from_selector(id.selector()), Some(id));
        }
    }

    #[test]
    fn test_frame_format_8n1() {
        assert_eq!(frame_format(&LineConfig::default_8n1()), 0b0000_0110);
    }

    #[test]
    fn test_frame_format_parity_and_stop_bits() {
        let odd = LineConfig::default_8n1().with_parity(Parity::Odd);
        assert_eq!(frame_format(&odd), 0b0011_0110);
        let even_two = LineConfig::default_8n1()
            .with_parity(Parity::Even)
            .with_stop_bits(StopBits::Two);
        assert_eq!(frame_format(&even_two), 0b0010_1110);
    }

    #[test]
    fn test_frame_format_keeps_literal_size_bits() {
        assert_eq!(frame_format(&LineConfig::default_8n1().with_data_bits(9)), 0b0000_0010);
        assert_eq!(frame_format(&LineConfig::default_8n1().with_data_bits(7)), 0);
        assert_eq!(frame_format(&LineConfig::default_8n1().with_data_bits(5)), 0);
    }

    #[test]
    fn test_initialize_programs_registers() {
        let mut ports = sim_ports();
        ports.initialize(2, 9600, 8, 2, 2);

        let hw = ports.hardware(PortId::Usart2);
        assert_eq!(hw.baud_divisor(), 103);
        assert_eq!(hw.control_b(), 0b0001_1000);
        assert_eq!(hw.control_c(), 0b0010_1110);
        assert_eq!(ports.parity(PortId::Usart2), Parity::Even);

        // Neighbours untouched
        assert_eq!(ports.hardware(PortId::Usart0).control_b(), 0);
        assert_eq!(ports.parity(PortId::Usart3), Parity::None);
    }

    #[test]
    fn test_unknown_parity_code_is_recorded_as_none() {
        let mut ports = sim_ports();
        ports.initialize(3, 9600, 8, 2, 1);
        assert_eq!(ports.parity(PortId::Usart3), Parity::Even);
        ports.initialize(3, 9600, 8, 7, 1);
        assert_eq!(ports.parity(PortId::Usart3), Parity::None);
        assert_eq!(ports.hardware(PortId::Usart3).control_c(), 0b0000_0110);
    }

    #[test]
    fn test_initialize_with_custom_clock() {
        let mut ports = sim_ports().with_clock(8_000_000);
        ports.initialize(0, 9600, 8, 0, 1);
        assert_eq!(ports.hardware(PortId::Usart0).baud_divisor(), 51);
    }

    #[test]
    fn test_unsupported_selector_is_silent() {
        let mut ports = sim_ports();
        ports.initialize(1, 9600, 8, 1, 2);
        ports.write_byte(1, b'x');
        ports.write_string(1, "hello\n");
        ports.clear_screen(1);
        ports.gotoxy(1, 3, 4);
        assert_eq!(ports.set_color(1, 0), Ok(()));
        assert!(!ports.is_available(1));
        ports.hardware_mut(PortId::Usart0).feed(b"1");
        assert!(!ports.is_available(7));

        for id in PortId::ALL {
            assert!(ports.hardware(id).transmitted().is_empty());
            assert_eq!(ports.hardware(id).control_b(), 0);
            assert_eq!(ports.parity(id), Parity::None);
        }
    }

    #[test]
    fn test_transmit_waits_for_data_register_empty() {
        let mut ports = sim_ports();
        ports.hardware_mut(PortId::Usart3).stall_transmit(5);
        ports.write_byte(3, b'Z');
        let hw = ports.hardware(PortId::Usart3);
        assert_eq!(hw.transmitted(), b"Z");
        assert_eq!(hw.status_polls(), 6);
    }

    #[test]
    fn test_receive_and_availability() {
        let mut ports = sim_ports();
        assert!(!ports.is_available(0));
        ports.hardware_mut(PortId::Usart0).feed(b"k");
        assert!(ports.is_available(0));
        assert!(!ports.is_available(2));
        assert_eq!(ports.read_byte(0), b'k');
        assert!(!ports.is_available(0));
    }

    #[test]
    fn test_selected_reports_support() {
        let mut ports = sim_ports();
        assert!(ports.select(0).is_supported());
        assert!(!ports.select(1).is_supported());
        assert_eq!(ports.select(1).selector(), 1);
    }
}
