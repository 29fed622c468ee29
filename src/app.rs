// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + touches.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (optionnel, même comportement que les boutons) :
// - ESC   = Clear
// - Enter = "=" (le focus est rendu d’abord : pas de double déclenchement)
// - 0-9 . + - * / = tapés au clavier

pub mod etat;
pub mod touches;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use touches::Touche;

/// Traduit les événements clavier de la frame en touches du pavé (dans l’ordre).
fn touches_clavier(events: &[egui::Event]) -> Vec<Touche> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(t) => out.extend(t.chars().filter_map(Touche::depuis_char)),
            egui::Event::Key {
                key: egui::Key::Escape,
                pressed: true,
                ..
            } => out.push(Touche::Effacer),
            egui::Event::Key {
                key: egui::Key::Enter,
                pressed: true,
                ..
            } => out.push(Touche::Egal),
            _ => {}
        }
    }
    out
}

/// Un bouton qui garde le focus est aussi « cliqué » par Enter :
/// on rend le focus avant de dessiner le pavé, sinon "=" puis la touche focus.
fn liberer_focus(ctx: &egui::Context) {
    if let Some(id) = ctx.memory(|m| m.focused()) {
        ctx.memory_mut(|m| m.surrender_focus(id));
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let touches = ctx.input(|i| touches_clavier(&i.events));
        if touches.contains(&Touche::Egal) {
            liberer_focus(ctx);
        }
        for t in touches {
            self.appuyer(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
