//! src/reglages.rs
//!
//! Réglages utilisateur (config.toml), lus une fois au démarrage.
//!
//! Emplacement : `<config_dir>/calculatrice-glow/config.toml`
//! Exemple :
//!
//! ```toml
//! mode_angle = "rad"
//! historique_max = 20
//! theme_sombre = true
//! ```
//!
//! Fichier absent => défauts. Fichier invalide => avertissement + défauts.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::noyau::AngleMode;

/// Taille d’historique par défaut (10 dernières évaluations).
pub const HISTORIQUE_DEFAUT: usize = 10;

/// Garde-fou : on borne l’historique.
pub const HISTORIQUE_MAX: usize = 100;

const DOSSIER: &str = "calculatrice-glow";
const FICHIER: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ReglagesError {
    #[error("lecture de {}: {source}", chemin.display())]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("format de {}: {source}", chemin.display())]
    Format {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub mode_angle: AngleMode,
    pub historique_max: usize,
    pub theme_sombre: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            mode_angle: AngleMode::Degrees,
            historique_max: HISTORIQUE_DEFAUT,
            theme_sombre: false,
        }
    }
}

impl Reglages {
    /// Chemin standard du fichier (None si la plateforme n’a pas de dossier de config).
    pub fn chemin_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(DOSSIER).join(FICHIER))
    }

    /// Parse un texte TOML (champs absents => défauts), puis borne les valeurs.
    pub fn depuis_toml(texte: &str) -> Result<Self, toml::de::Error> {
        let r: Self = toml::from_str(texte)?;
        Ok(r.bornes())
    }

    /// Lit un fichier précis. Fichier absent => Ok(None).
    pub fn lire(chemin: &Path) -> Result<Option<Self>, ReglagesError> {
        let texte = match std::fs::read_to_string(chemin) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ReglagesError::Lecture {
                    chemin: chemin.to_path_buf(),
                    source,
                })
            }
        };

        Self::depuis_toml(&texte)
            .map(Some)
            .map_err(|source| ReglagesError::Format {
                chemin: chemin.to_path_buf(),
                source,
            })
    }

    /// Charge depuis l’emplacement standard ; n’échoue jamais (défauts en repli).
    pub fn charger() -> Self {
        let Some(chemin) = Self::chemin_defaut() else {
            return Self::default();
        };

        match Self::lire(&chemin) {
            Ok(Some(r)) => {
                info!(chemin = %chemin.display(), "réglages chargés");
                r
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(erreur = %e, "réglages ignorés, valeurs par défaut");
                Self::default()
            }
        }
    }

    fn bornes(mut self) -> Self {
        self.historique_max = self.historique_max.clamp(1, HISTORIQUE_MAX);
        self
    }
}
