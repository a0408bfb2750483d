// src/app.rs
//
// Calculatrice Verre — module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (état, vue, clavier, config, historique)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier physique est lu ici, une seule fois par frame (pas de champ texte,
//   donc pas de double déclenchement avec un widget focus).

pub mod clavier;
pub mod config;
pub mod etat;
pub mod historique;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Même alphabet que le pavé : chiffres, + - * / . % ^, "=", Entrée,
        // Retour arrière / Suppr, Échap.
        let events = ctx.input(|i| i.events.clone());
        for cmd in clavier::commandes_du_cadre(&events) {
            self.executer(cmd);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
