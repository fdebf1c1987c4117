#[derive(Debug)]
pub enum MachineError {
    ReadError,
    WriteError,
    InputExhausted,
    IndexOutOfRange,
    DuplicateDrink,
    FileReaderError,
}

impl From<serde_json::Error> for MachineError {
    fn from(_: serde_json::Error) -> Self {
        MachineError::FileReaderError
    }
}
