// src/main.rs
//
// Calculatrice Verre — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//                                 + CLI (clap) : --eval, --config, --sans-historique
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// Journaux (natif) : RUST_LOG=debug calculatrice_verre

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice Verre";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use anyhow::anyhow;
    use clap::Parser;
    use log::info;

    use super::{egui, AppCalc, TITRE_APP};
    use crate::app::config::Config;
    use crate::app::historique::Historique;
    use crate::noyau::{eval_expression, format_affichage};

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice-verre", version, about = "Calculatrice à pavé, évaluation exacte")]
    pub struct Args {
        /// Évalue EXPR sans interface, affiche le résultat puis quitte
        #[arg(long, value_name = "EXPR", allow_hyphen_values = true)]
        pub eval: Option<String>,

        /// Fichier de configuration TOML (sinon: dossier de config utilisateur)
        #[arg(long, value_name = "CHEMIN")]
        pub config: Option<PathBuf>,

        /// Ne lit ni n’écrit l’historique sur disque
        #[arg(long)]
        pub sans_historique: bool,
    }

    pub fn main() -> anyhow::Result<()> {
        env_logger::init();
        let args = Args::parse();

        if let Some(expr) = &args.eval {
            return eval_sans_interface(expr);
        }

        let config = match args.config.clone().or_else(Config::chemin_defaut) {
            Some(chemin) => Config::charger(&chemin),
            None => Config::default(),
        };
        let chemin_historique = if args.sans_historique {
            None
        } else {
            Historique::chemin_defaut()
        };
        info!("démarrage (historique: {chemin_historique:?})");

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([380.0, 640.0])
                .with_min_inner_size([340.0, 560.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(move |_cc| Ok(Box::new(AppCalc::new(&config, chemin_historique)))),
        )
        .map_err(|e| anyhow!("eframe: {e}"))
    }

    /// `--eval` : même affichage que l’écran ("Error" en cas d’échec), code 1 si échec.
    fn eval_sans_interface(expr: &str) -> anyhow::Result<()> {
        let res = eval_expression(expr);
        println!("{}", format_affichage(&res));
        res.map(|_| ()).map_err(Into::into)
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    natif::main()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// Pas de fichier de config ni d’historique disque côté web : valeurs par défaut.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
