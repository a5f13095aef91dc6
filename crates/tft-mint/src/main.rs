//! One-shot admin script that mints a TFT player object.
//!
//! Builds a single programmable transaction calling
//! `{PACKAGE_ID}::tft::mint_player`, setting the new player's health via
//! `tft::update_health`, and transferring the minted object to the admin
//! address, then signs and submits it to a fullnode.

mod config;

use anyhow::Result;
use config::EnvConfig;
use tft_sui_client::account::{derive_keypair, AnyKeypair, Keypair, SignatureScheme};
use tft_sui_client::rpc::{ExecuteOptions, RequestType, SuiClient, TransactionBlockResponse};
use tft_sui_client::transaction::{sign_transaction, TransactionBuilder, TransactionData};
use tft_sui_client::types::{ObjectId, ObjectRef, SuiAddress};
use tft_sui_client::{SuiConfig, SuiResult};

const PLAYER_NAME: &str = "alina";
const PLAYER_IMAGE_URL: &str = "https://placehold.co/600x400/FFF000/000?text=yo";
const PLAYER_HEALTH: u64 = 111;
const GAS_BUDGET: u64 = 100_000_000;

/// Builds the mint transaction.
///
/// `include_health_update` controls whether the health of the freshly
/// minted player is set before the transfer; both variants of the
/// deployment flow exist.
fn build_mint_transaction(
    package: ObjectId,
    admin: SuiAddress,
    gas_price: u64,
    gas_coin: ObjectRef,
    include_health_update: bool,
) -> SuiResult<TransactionData> {
    let mut builder = TransactionBuilder::new();
    builder
        .sender(admin)
        .gas_price(gas_price)
        .gas_budget(GAS_BUDGET)
        .gas_payment(gas_coin);

    let name = builder.pure(&PLAYER_NAME)?;
    let image_url = builder.pure(&PLAYER_IMAGE_URL)?;
    let player = builder.move_call(package, "tft", "mint_player", vec![], vec![name, image_url])?;

    if include_health_update {
        let health = builder.pure(&PLAYER_HEALTH)?;
        builder.move_call(package, "tft", "update_health", vec![], vec![health, player])?;
    }

    builder.transfer_objects(vec![player], admin)?;
    builder.build()
}

async fn mint_player(
    client: &SuiClient,
    keypair: &AnyKeypair,
    package: ObjectId,
) -> Result<TransactionBlockResponse> {
    let admin = keypair.address();
    tracing::info!(%admin, %package, "minting player");

    let gas_price = client.get_reference_gas_price().await?;
    let gas_coin = client.select_gas_payment(admin, GAS_BUDGET).await?;

    let tx = build_mint_transaction(package, admin, gas_price, gas_coin, true)?;
    let signed = sign_transaction(keypair, &tx)?;

    let response = client
        .execute_transaction_block(
            &signed,
            ExecuteOptions::all(),
            RequestType::WaitForLocalExecution,
        )
        .await?;
    Ok(response)
}

async fn run() -> Result<()> {
    let env = EnvConfig::from_env()?;
    let keypair = derive_keypair(SignatureScheme::Ed25519, &env.admin_private_key)?;
    let client = SuiClient::new(SuiConfig::for_network(&env.network)?)?;

    let response = mint_player(&client, &keypair, env.package_id).await?;

    if let Some(error) = response.execution_error() {
        tracing::warn!(digest = %response.digest, error, "transaction executed but failed");
    }
    println!("-------- Mint response: --------");
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tft_sui_client::transaction::{Command, TransactionKind};
    use tft_sui_client::types::ObjectDigest;

    fn gas_coin() -> ObjectRef {
        ObjectRef::new(
            ObjectId::from_hex("0x5").unwrap(),
            3,
            ObjectDigest::new([1u8; 32]),
        )
    }

    fn commands(tx: &TransactionData) -> &[Command] {
        match tx {
            TransactionData::V1(v1) => match &v1.kind {
                TransactionKind::ProgrammableTransaction(pt) => &pt.commands,
            },
        }
    }

    #[test]
    fn test_mint_transaction_shape() {
        let package = ObjectId::from_hex("0x2").unwrap();
        let admin = SuiAddress::from_hex("0xabcd").unwrap();
        let tx = build_mint_transaction(package, admin, 1000, gas_coin(), true).unwrap();

        let cmds = commands(&tx);
        assert_eq!(cmds.len(), 3);
        match &cmds[0] {
            Command::MoveCall(call) => {
                assert_eq!(call.module, "tft");
                assert_eq!(call.function, "mint_player");
                assert_eq!(call.arguments.len(), 2);
            }
            other => panic!("expected move call, got {other:?}"),
        }
        match &cmds[1] {
            Command::MoveCall(call) => assert_eq!(call.function, "update_health"),
            other => panic!("expected move call, got {other:?}"),
        }
        assert!(matches!(cmds[2], Command::TransferObjects(_, _)));

        assert_eq!(tx.gas_data().budget, GAS_BUDGET);
        assert_eq!(tx.gas_data().owner, admin);
        assert_eq!(tx.sender(), admin);
    }

    #[test]
    fn test_mint_without_health_update() {
        let package = ObjectId::from_hex("0x2").unwrap();
        let admin = SuiAddress::from_hex("0xabcd").unwrap();
        let tx = build_mint_transaction(package, admin, 1000, gas_coin(), false).unwrap();

        let cmds = commands(&tx);
        assert_eq!(cmds.len(), 2);
        assert!(matches!(cmds[1], Command::TransferObjects(_, _)));
    }

    #[test]
    fn test_command_order_survives_serialization() {
        let package = ObjectId::from_hex("0x2").unwrap();
        let admin = SuiAddress::from_hex("0xabcd").unwrap();
        let tx = build_mint_transaction(package, admin, 1000, gas_coin(), true).unwrap();

        let bytes = tx.to_bcs().unwrap();
        let back: TransactionData = bcs::from_bytes(&bytes).unwrap();
        let cmds = commands(&back);
        assert!(matches!(&cmds[0], Command::MoveCall(c) if c.function == "mint_player"));
        assert!(matches!(&cmds[1], Command::MoveCall(c) if c.function == "update_health"));
    }
}
