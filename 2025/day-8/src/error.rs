use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CircuitError {
    #[error("failed to parse junction box coordinates: {reason}")]
    #[diagnostic(
        code(day8::parse),
        help("each line must hold three integers separated by commas, e.g. `162,817,812`")
    )]
    Parse {
        reason: String,
        #[source_code]
        input: String,
        #[label("{reason}")]
        span: SourceSpan,
    },

    #[error("asked for {requested} connections but only {available} pairs exist")]
    #[diagnostic(
        code(day8::too_many_connections),
        help("lower the number of connections or provide more junction boxes")
    )]
    TooManyConnections { requested: usize, available: usize },

    #[error("expected at least 3 circuits after connecting, found {found}")]
    #[diagnostic(
        code(day8::too_few_circuits),
        help("fewer connections leave more circuits apart")
    )]
    TooFewCircuits { found: usize },

    #[error("junction boxes never formed a single circuit")]
    #[diagnostic(code(day8::never_connected))]
    NeverConnected,
}
