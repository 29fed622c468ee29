// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : expression (ou "0") au-dessus du nombre courant / résultat
// - Clear pleine largeur
// - Pavé 4×4 (PAVE)
//
// La vue ne touche jamais l’état directement : chaque clic devient une Touche.

use eframe::egui;

use super::etat::AppCalc;
use super::touches::{Touche, LIBELLE_EFFACER, PAVE};

const ESPACE: f32 = 8.0;
const HAUTEUR_BOUTON: f32 = 52.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        self.ui_ecran(ui);
        ui.add_space(ESPACE);
        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage_expression())
                            .monospace()
                            .size(16.0)
                            .weak(),
                    );
                    ui.label(
                        egui::RichText::new(self.courant())
                            .monospace()
                            .size(34.0)
                            .strong(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let largeur = ui.available_width();
        let cote = (largeur - 3.0 * ESPACE) / 4.0;

        let effacer = ui.add_sized(
            [largeur, HAUTEUR_BOUTON],
            egui::Button::new(LIBELLE_EFFACER).fill(egui::Color32::from_rgb(200, 60, 60)),
        );
        if effacer.clicked() {
            self.appuyer(Touche::Effacer);
        }

        egui::Grid::new("pave_calc")
            .num_columns(4)
            .spacing([ESPACE, ESPACE])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for libelle in ligne {
                        self.bouton(ui, libelle, [cote, HAUTEUR_BOUTON]);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, taille: [f32; 2]) {
        let Some(touche) = Touche::depuis_libelle(libelle) else {
            return;
        };

        let mut b = egui::Button::new(egui::RichText::new(libelle).size(20.0));
        if touche == Touche::Egal {
            b = b.fill(egui::Color32::from_rgb(60, 160, 80));
        }

        if ui.add_sized(taille, b).clicked() {
            self.appuyer(touche);
        }
    }
}
