//! Example usage: pull a patient's given name out of an ADT message
//!
//! Run with `RUST_LOG=debug` to see the extraction events.

use hl7path::{Hl7, Path};

fn main() {
    env_logger::init();

    let message = "MSH|^~\\&|SendingApp|SendingFac|ReceivingApp|ReceivingFac|20240101120000||ADT^A01|123|P|2.5\rPID|1||PatientID||Doe^John";

    let path = Path {
        segment: "PID".to_string(),
        segment_index: 1,
        field: 5,
        repetition_index: 1,
        component: 2,
        subcomponent: 0,
    };

    match Hl7::new().extract_path(message, &path) {
        Ok(value) => println!("Result: {value}"),
        Err(error) => println!("Error: {error}"),
    }

    match hl7path::path("MSH").field(9).component(2).extract(message) {
        Ok(trigger) => println!("Trigger event: {trigger}"),
        Err(error) => println!("Error: {error}"),
    }
}
