extern crate altrep;

/// Feed key events to a controller and check what it sent to the host.
///
/// Evaluates to `(controller, host)` for further checks.
#[macro_export]
macro_rules! magic_sequence_test {
    (controller: $controller:expr, host: $host:expr, sequence: [$($event:expr),* $(,)?], expected_outputs: [$($output:expr),* $(,)?]) => {{
        let mut controller = $controller;
        let mut host = $host;
        $(
            controller.process_key($event, &mut host);
        )*
        let expected_outputs: Vec<$crate::common::Output> = vec![$($output),*];
        assert_eq!(host.outputs, expected_outputs);
        (controller, host)
    }};
    (controller: $controller:expr, sequence: [$($event:expr),* $(,)?], expected_outputs: [$($output:expr),* $(,)?]) => {
        $crate::magic_sequence_test! {
            controller: $controller,
            host: $crate::common::TestHost::default(),
            sequence: [$($event),*],
            expected_outputs: [$($output),*]
        }
    };
}

// Raw keycode of a plain key
#[macro_export]
macro_rules! kc {
    ($key: ident) => {
        altrep::keycode::HidKeyCode::$key as u16
    };
}
