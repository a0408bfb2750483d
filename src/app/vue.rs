// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage : expression en cours + résultat en direct (ou "Error")
// - Pavé 5×4 : les glyphes (÷ × −) envoient le jeton ASCII canonique
// - Historique cliquable + démarche (jetons / RPN) repliables
//
// Note :
// - Le clavier physique est traité dans app.rs (événements globaux),
//   ici on ne gère que les clics.

use eframe::egui;

use super::clavier::Commande;
use super::etat::AppCalc;
use crate::noyau::format::{format_affichage, format_nombre};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Genre {
    Nombre,
    Operateur,
    Fonction,
    Egal,
}

#[derive(Clone, Copy, Debug)]
struct Touche {
    affiche: &'static str,
    commande: Commande,
    genre: Genre,
}

const fn t(affiche: &'static str, commande: Commande, genre: Genre) -> Touche {
    Touche {
        affiche,
        commande,
        genre,
    }
}

const fn ajout(affiche: &'static str, c: char, genre: Genre) -> Touche {
    t(affiche, Commande::Ajouter(c), genre)
}

const PAVE: [[Touche; 4]; 5] = [
    [
        t("C", Commande::Effacer, Genre::Fonction),
        ajout("%", '%', Genre::Operateur),
        ajout("x^y", '^', Genre::Operateur),
        t("DEL", Commande::EffacerDernier, Genre::Fonction),
    ],
    [
        ajout("7", '7', Genre::Nombre),
        ajout("8", '8', Genre::Nombre),
        ajout("9", '9', Genre::Nombre),
        ajout("÷", '/', Genre::Operateur),
    ],
    [
        ajout("4", '4', Genre::Nombre),
        ajout("5", '5', Genre::Nombre),
        ajout("6", '6', Genre::Nombre),
        ajout("×", '*', Genre::Operateur),
    ],
    [
        ajout("1", '1', Genre::Nombre),
        ajout("2", '2', Genre::Nombre),
        ajout("3", '3', Genre::Nombre),
        ajout("−", '-', Genre::Operateur),
    ],
    [
        ajout("0", '0', Genre::Nombre),
        ajout(".", '.', Genre::Nombre),
        t("=", Commande::Calculer, Genre::Egal),
        ajout("+", '+', Genre::Operateur),
    ],
];

/// Taille du résultat selon sa longueur (le texte long rétrécit).
pub fn taille_police_resultat(longueur: usize) -> f32 {
    if longueur > 20 {
        18.0
    } else if longueur > 15 {
        22.0
    } else if longueur > 10 {
        28.0
    } else {
        34.0
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Verre");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();

                self.ui_historique(ui);
                self.ui_demarche(ui);
            });
    }

    fn couleur_accent(&self) -> egui::Color32 {
        let [r, g, b] = self.accent;
        egui::Color32::from_rgb(r, g, b)
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        let res = self.saisie.resultat();
        let texte_res = format_affichage(res);

        let (bord, couleur_res) = if res.is_err() {
            (ui.visuals().error_fg_color, ui.visuals().error_fg_color)
        } else {
            (self.couleur_accent(), ui.visuals().strong_text_color())
        };

        let expression = if self.saisie.expression().is_empty() {
            "0"
        } else {
            self.saisie.expression()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .stroke(egui::Stroke::new(1.5, bord))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(expression).monospace().size(22.0));
                    ui.label(
                        egui::RichText::new(&texte_res)
                            .monospace()
                            .size(taille_police_resultat(texte_res.chars().count()))
                            .color(couleur_res),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let mut clic: Option<Commande> = None;

        egui::Grid::new("pave_verre")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for rangee in PAVE.iter() {
                    for touche in rangee {
                        if self.bouton(ui, touche) {
                            clic = Some(touche.commande);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(cmd) = clic {
            self.executer(cmd);
        }
    }

    fn bouton(&self, ui: &mut egui::Ui, touche: &Touche) -> bool {
        let v = ui.visuals();
        let fond = match touche.genre {
            Genre::Nombre => v.widgets.inactive.weak_bg_fill,
            Genre::Operateur => v.widgets.active.weak_bg_fill,
            Genre::Fonction => v.faint_bg_color,
            Genre::Egal => self.couleur_accent(),
        };

        let label = egui::RichText::new(touche.affiche).size(20.0);
        ui.add_sized([72.0, 48.0], egui::Button::new(label).fill(fond))
            .clicked()
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut rappel: Option<usize> = None;
        let mut vider = false;

        egui::CollapsingHeader::new(format!("Historique ({})", self.historique.len()))
            .id_salt("historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.weak("Aucun calcul pour l’instant");
                    return;
                }

                for (i, e) in self.historique.entrees().enumerate() {
                    let ligne = format!("{} = {}", e.expression, format_nombre(e.resultat));
                    if ui
                        .add(egui::Button::new(egui::RichText::new(ligne).monospace()).frame(false))
                        .on_hover_text("Remettre dans l’entrée")
                        .clicked()
                    {
                        rappel = Some(i);
                    }
                }

                ui.add_space(4.0);
                if ui.button("Vider l’historique").clicked() {
                    vider = true;
                }
            });

        if let Some(i) = rappel {
            self.rappeler(i);
        }
        if vider {
            self.vider_historique();
        }
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                let d = self.saisie.demarche();
                Self::champ_demarche(ui, "Normalisée", "demarche_norm", &d.normalisee);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &d.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
