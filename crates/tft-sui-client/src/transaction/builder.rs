//! Programmable transaction builder.

use crate::error::{SuiError, SuiResult};
use crate::transaction::types::{
    Argument, CallArg, Command, GasData, ObjectArg, ProgrammableMoveCall, ProgrammableTransaction,
    TransactionData,
};
use crate::types::{ObjectId, ObjectRef, SuiAddress, TypeTag};
use serde::Serialize;

/// Builder for programmable transactions.
///
/// Inputs and commands are appended in order; command methods return the
/// [`Argument`] under which their result can be referenced by later
/// commands. Arguments are validated as they are added, so a command can
/// never reference a result that does not exist yet.
///
/// # Example
///
/// ```rust
/// use tft_sui_client::transaction::TransactionBuilder;
/// use tft_sui_client::types::{ObjectId, SuiAddress};
///
/// # fn main() -> tft_sui_client::SuiResult<()> {
/// let package = ObjectId::from_hex("0x2")?;
/// let recipient = SuiAddress::from_hex("0xa")?;
///
/// let mut builder = TransactionBuilder::new();
/// let name = builder.pure(&"alina")?;
/// let player = builder.move_call(package, "tft", "mint_player", vec![], vec![name])?;
/// builder.transfer_objects(vec![player], recipient)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    sender: Option<SuiAddress>,
    inputs: Vec<CallArg>,
    commands: Vec<Command>,
    gas_payment: Vec<ObjectRef>,
    gas_price: Option<u64>,
    gas_budget: Option<u64>,
}

impl TransactionBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender address.
    pub fn sender(&mut self, sender: SuiAddress) -> &mut Self {
        self.sender = Some(sender);
        self
    }

    /// Sets the gas budget in MIST.
    pub fn gas_budget(&mut self, budget: u64) -> &mut Self {
        self.gas_budget = Some(budget);
        self
    }

    /// Sets the gas price in MIST per unit.
    pub fn gas_price(&mut self, price: u64) -> &mut Self {
        self.gas_price = Some(price);
        self
    }

    /// Adds a coin to pay gas with.
    pub fn gas_payment(&mut self, coin: ObjectRef) -> &mut Self {
        self.gas_payment.push(coin);
        self
    }

    /// Adds a pure input, BCS-encoding the value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be BCS-encoded.
    pub fn pure<T: Serialize>(&mut self, value: &T) -> SuiResult<Argument> {
        let bytes = bcs::to_bytes(value).map_err(SuiError::bcs)?;
        Ok(self.push_input(CallArg::Pure(bytes)))
    }

    /// Adds an object input.
    pub fn object(&mut self, object: ObjectArg) -> Argument {
        self.push_input(CallArg::Object(object))
    }

    /// Adds an owned-object input from its reference.
    pub fn owned_object(&mut self, object_ref: ObjectRef) -> Argument {
        self.object(ObjectArg::ImmOrOwnedObject(object_ref))
    }

    /// Appends a Move call command and returns its result argument.
    ///
    /// # Errors
    ///
    /// Returns an error if any argument references a missing input or a
    /// command that has not been added yet.
    pub fn move_call(
        &mut self,
        package: ObjectId,
        module: &str,
        function: &str,
        type_arguments: Vec<TypeTag>,
        arguments: Vec<Argument>,
    ) -> SuiResult<Argument> {
        for arg in &arguments {
            self.check_argument(arg)?;
        }
        self.push_command(Command::MoveCall(Box::new(ProgrammableMoveCall {
            package,
            module: module.to_string(),
            function: function.to_string(),
            type_arguments,
            arguments,
        })))
    }

    /// Appends a command transferring objects to a recipient address.
    ///
    /// The recipient is added as a pure input.
    ///
    /// # Errors
    ///
    /// Returns an error if an object argument is invalid, or if the
    /// object list is empty.
    pub fn transfer_objects(
        &mut self,
        objects: Vec<Argument>,
        recipient: SuiAddress,
    ) -> SuiResult<Argument> {
        if objects.is_empty() {
            return Err(SuiError::transaction("nothing to transfer"));
        }
        for arg in &objects {
            self.check_argument(arg)?;
        }
        let recipient = self.pure(&recipient)?;
        self.push_command(Command::TransferObjects(objects, recipient))
    }

    /// Appends a command splitting amounts off a coin.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument is invalid.
    pub fn split_coins(&mut self, coin: Argument, amounts: Vec<Argument>) -> SuiResult<Argument> {
        self.check_argument(&coin)?;
        for arg in &amounts {
            self.check_argument(arg)?;
        }
        self.push_command(Command::SplitCoins(coin, amounts))
    }

    /// Appends a command merging coins into the first one.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument is invalid.
    pub fn merge_coins(&mut self, target: Argument, coins: Vec<Argument>) -> SuiResult<Argument> {
        self.check_argument(&target)?;
        for arg in &coins {
            self.check_argument(arg)?;
        }
        self.push_command(Command::MergeCoins(target, coins))
    }

    /// Finalizes the builder into transaction data.
    ///
    /// # Errors
    ///
    /// Returns an error if the sender, gas price, gas budget, or gas
    /// payment is missing, or if no commands were added.
    pub fn build(self) -> SuiResult<TransactionData> {
        let sender = self
            .sender
            .ok_or_else(|| SuiError::transaction("sender not set"))?;
        let price = self
            .gas_price
            .ok_or_else(|| SuiError::transaction("gas price not set"))?;
        let budget = self
            .gas_budget
            .ok_or_else(|| SuiError::transaction("gas budget not set"))?;
        if self.gas_payment.is_empty() {
            return Err(SuiError::transaction("gas payment not set"));
        }
        if self.commands.is_empty() {
            return Err(SuiError::transaction("transaction has no commands"));
        }

        let pt = ProgrammableTransaction {
            inputs: self.inputs,
            commands: self.commands,
        };
        let gas_data = GasData {
            payment: self.gas_payment,
            owner: sender,
            price,
            budget,
        };
        Ok(TransactionData::new_programmable(sender, pt, gas_data))
    }

    fn push_input(&mut self, input: CallArg) -> Argument {
        let index = self.inputs.len() as u16;
        self.inputs.push(input);
        Argument::Input(index)
    }

    fn push_command(&mut self, command: Command) -> SuiResult<Argument> {
        let index = self.commands.len();
        if index > u16::MAX as usize {
            return Err(SuiError::transaction("too many commands"));
        }
        self.commands.push(command);
        Ok(Argument::Result(index as u16))
    }

    fn check_argument(&self, arg: &Argument) -> SuiResult<()> {
        match arg {
            Argument::GasCoin => Ok(()),
            Argument::Input(i) => {
                if (*i as usize) < self.inputs.len() {
                    Ok(())
                } else {
                    Err(SuiError::transaction(format!(
                        "input {i} does not exist"
                    )))
                }
            }
            Argument::Result(i) | Argument::NestedResult(i, _) => {
                if (*i as usize) < self.commands.len() {
                    Ok(())
                } else {
                    Err(SuiError::transaction(format!(
                        "command {i} has no result yet; results can only refer to earlier commands"
                    )))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ObjectDigest;

    fn gas_coin() -> ObjectRef {
        ObjectRef::new(
            ObjectId::from_hex("0x5").unwrap(),
            3,
            ObjectDigest::new([1u8; 32]),
        )
    }

    fn sender() -> SuiAddress {
        SuiAddress::from_hex("0xa").unwrap()
    }

    #[test]
    fn test_build_mint_style_transaction() {
        let package = ObjectId::from_hex("0x2").unwrap();
        let mut builder = TransactionBuilder::new();
        builder
            .sender(sender())
            .gas_price(1000)
            .gas_budget(100_000_000)
            .gas_payment(gas_coin());

        let name = builder.pure(&"alina").unwrap();
        let player = builder
            .move_call(package, "tft", "mint_player", vec![], vec![name])
            .unwrap();
        assert_eq!(player, Argument::Result(0));

        let health = builder.pure(&111u64).unwrap();
        builder
            .move_call(package, "tft", "update_health", vec![], vec![health, player])
            .unwrap();
        builder.transfer_objects(vec![player], sender()).unwrap();

        let tx = builder.build().unwrap();
        match &tx {
            TransactionData::V1(v1) => match &v1.kind {
                crate::transaction::types::TransactionKind::ProgrammableTransaction(pt) => {
                    // name, health, recipient
                    assert_eq!(pt.inputs.len(), 3);
                    assert_eq!(pt.commands.len(), 3);
                    assert!(matches!(pt.commands[2], Command::TransferObjects(_, _)));
                }
            },
        }
        assert_eq!(tx.gas_data().budget, 100_000_000);
        assert_eq!(tx.gas_data().owner, sender());
    }

    #[test]
    fn test_forward_result_reference_rejected() {
        let package = ObjectId::from_hex("0x2").unwrap();
        let mut builder = TransactionBuilder::new();
        // Result(0) does not exist before any command is added
        let err = builder
            .move_call(package, "tft", "update_health", vec![], vec![Argument::Result(0)])
            .unwrap_err();
        assert!(err.to_string().contains("earlier commands"));
    }

    #[test]
    fn test_missing_input_rejected() {
        let package = ObjectId::from_hex("0x2").unwrap();
        let mut builder = TransactionBuilder::new();
        assert!(builder
            .move_call(package, "tft", "mint_player", vec![], vec![Argument::Input(4)])
            .is_err());
    }

    #[test]
    fn test_build_requires_gas_fields() {
        let package = ObjectId::from_hex("0x2").unwrap();

        let mut builder = TransactionBuilder::new();
        builder.sender(sender()).gas_price(1000).gas_budget(1);
        builder
            .move_call(package, "tft", "mint_player", vec![], vec![])
            .unwrap();
        // No gas payment
        assert!(builder.build().is_err());

        let mut builder = TransactionBuilder::new();
        builder.sender(sender()).gas_price(1000).gas_payment(gas_coin());
        builder
            .move_call(package, "tft", "mint_player", vec![], vec![])
            .unwrap();
        // No budget
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_build_requires_commands() {
        let mut builder = TransactionBuilder::new();
        builder
            .sender(sender())
            .gas_price(1000)
            .gas_budget(1)
            .gas_payment(gas_coin());
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_empty_transfer_rejected() {
        let mut builder = TransactionBuilder::new();
        assert!(builder.transfer_objects(vec![], sender()).is_err());
    }

    #[test]
    fn test_split_from_gas_coin() {
        let mut builder = TransactionBuilder::new();
        builder
            .sender(sender())
            .gas_price(1000)
            .gas_budget(1)
            .gas_payment(gas_coin());
        let amount = builder.pure(&500u64).unwrap();
        let split = builder.split_coins(Argument::GasCoin, vec![amount]).unwrap();
        assert_eq!(split, Argument::Result(0));
    }
}
