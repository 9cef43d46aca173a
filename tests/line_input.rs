use tiny_uart::{LineBuffer, PortId, SerialIo, SimulatedUsart, UartPorts};

fn sim_ports() -> UartPorts<SimulatedUsart> {
    UartPorts::new(
        SimulatedUsart::new(),
        SimulatedUsart::new(),
        SimulatedUsart::new(),
    )
}

fn read_line_from(selector: u8, input: &[u8]) -> (LineBuffer, Vec<u8>, usize) {
    let mut ports = sim_ports();
    let id = PortId::try_from(selector).expect("supported selector");
    ports.initialize(selector, 9600, 8, 0, 1);
    assert_eq!(ports.hardware_mut(id).feed(input), input.len());

    let mut line = LineBuffer::new();
    let len = ports.read_line(selector, &mut line);
    let echo = ports.hardware(id).transmitted().to_vec();
    (line, echo, len)
}

#[test]
fn decimal_value_is_stored_and_echoed() {
    let (line, echo, len) = read_line_from(0, b"12.5\r");
    assert_eq!(len, 4);
    assert_eq!(line.as_str(), "12.5");
    assert_eq!(echo, b"12.5\r\n");
}

#[test]
fn backspace_erases_then_retype() {
    let (line, echo, _) = read_line_from(2, b"9\x083\r");
    assert_eq!(line.as_str(), "3");
    assert_eq!(echo, b"9\x08 \x083\r\n");
}

#[test]
fn letters_are_neither_stored_nor_echoed() {
    let (line, echo, _) = read_line_from(3, b"x1y\n");
    assert_eq!(line.as_str(), "1");
    assert_eq!(echo, b"1\r\n");
}

#[test]
fn only_the_first_line_is_consumed() {
    let mut ports = sim_ports();
    ports.hardware_mut(PortId::Usart0).feed(b"42\r7\r");

    let mut first = LineBuffer::new();
    ports.read_line(0, &mut first);
    assert_eq!(first.leading_number(), 42);
    assert_eq!(ports.hardware(PortId::Usart0).pending_rx(), 2);

    let mut second = LineBuffer::new();
    ports.read_line(0, &mut second);
    assert_eq!(second.leading_number(), 7);
    assert!(!ports.is_available(0));
}

#[test]
fn reused_buffer_is_reterminated() {
    let mut ports = sim_ports();
    ports.hardware_mut(PortId::Usart3).feed(b"123456\r8\r");

    let mut line = LineBuffer::new();
    ports.read_line(3, &mut line);
    assert_eq!(line.as_str(), "123456");
    ports.read_line(3, &mut line);
    assert_eq!(line.as_str(), "8");
    assert_eq!(&line.raw()[..3], b"8\x003");
}

#[test]
fn port_handle_echoes_single_cr_lf() {
    let mut ports = sim_ports();
    ports.hardware_mut(PortId::Usart2).feed(b"3.75\n");

    let mut line = LineBuffer::new();
    let len = ports.port_mut(PortId::Usart2).read_line(&mut line);

    assert_eq!(len, 4);
    assert_eq!(line.as_str(), "3.75");
    assert_eq!(ports.hardware(PortId::Usart2).transmitted(), b"3.75\r\n");
}

#[test]
fn empty_line_echo_is_exactly_cr_lf() {
    for terminator in [b'\r', b'\n'] {
        let (line, echo, len) = read_line_from(0, &[terminator]);
        assert_eq!(len, 0);
        assert!(line.is_empty());
        assert_eq!(echo, [b'\r', b'\n']);
    }
}
