// src/main.rs
//
// Calculette — point d’entrée ligne de commande
// ---------------------------------------------
// Rôle :
// - un argument positionnel : l’expression (ex: "3 + 2")
// - succès : `Result: <valeur>` sur stdout, code 0
// - échec  : un message lisible, code 1
//   (mauvais nombre d’arguments compris : clap sortirait en 2,
//    on force 1 via try_parse)
//
// Traces : RUST_LOG (ex: RUST_LOG=debug) ; silencieux sinon.
//
// IMPORTANT (structure projet):
// - tout le comportement vit dans la bibliothèque (src/noyau/)
// - ici : enveloppe seulement (arguments, traces, code de sortie)

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use calculette::noyau::eval::evaluer_expression;
use calculette::noyau::format::format_resultat;

/// Calculette quatre opérations.
#[derive(Parser)]
#[command(name = "calculette", about = "Évalue une expression comme \"3 + 2\"")]
struct Cli {
    /// Expression à évaluer, en un seul argument (ex: "10.5 * 2").
    expression: String,
}

fn main() -> ExitCode {
    init_traces();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version sortent en 0 ; toute erreur d’usage en 1.
            let usage_ok = !e.use_stderr();
            let _ = e.print();
            return if usage_ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    debug!(expression = %cli.expression, "évaluation demandée");

    match evaluer_expression(&cli.expression) {
        Ok(valeur) => {
            println!("{}", format_resultat(valeur));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Erreur: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Traces activées seulement si RUST_LOG est posé (sinon : silence).
fn init_traces() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }
}
