//! Trait base para drivers

/// Tipo de dispositivo
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceType {
    Block,
    Char,
    Network,
    Input,
    Display,
    Timer,
    Unknown,
}

/// Erro de driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriverError {
    NotSupported,
    NotFound,
    InitFailed,
    IoError,
}

/// Versão de driver: (major, minor, patch)
pub type DriverVersion = (u16, u16, u16);

/// Trait que todo driver deve implementar
///
/// `init` é o único ponto de falha reportável do ciclo de vida: para o
/// console de texto a falha é tratada como fatal pelo kernel hospedeiro,
/// já que sem console não há saída de diagnóstico.
pub trait Driver: Send {
    /// Nome do driver (fixo, não vazio)
    fn name(&self) -> &'static str;

    /// Tipo de dispositivo
    fn device_type(&self) -> DeviceType;

    /// Versão do driver
    fn version(&self) -> DriverVersion;

    /// Chamado uma vez pelo framework de detecção após o probe
    fn init(&mut self) -> Result<(), DriverError>;
}
