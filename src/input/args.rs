use super::InputProvider;

/// Addresses known up front.
#[derive(Debug, Default)]
pub struct ArgsInput {
    inputs: std::vec::IntoIter<String>,
}

impl ArgsInput {
    pub fn new(inputs: Vec<String>) -> Self {
        ArgsInput {
            inputs: inputs.into_iter(),
        }
    }
}

impl InputProvider for ArgsInput {
    fn next_input(&mut self) -> Option<String> {
        self.inputs.next()
    }
}
