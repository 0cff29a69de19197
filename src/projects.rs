#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectInfo {
    pub id: u32,
    pub title: &'static str,
    pub technologies: &'static str,
    pub description: &'static str,
    pub preview_icon: &'static str,
    pub preview_caption: &'static str,
}

pub static PROJECTS: [ProjectInfo; 3] = [
    ProjectInfo {
        id: 1,
        title: "Site E-Commerce",
        technologies: "HTML5, CSS3, JavaScript, Stripe API",
        description: "Une plateforme de vente en ligne complète permettant aux utilisateurs de parcourir des produits, de les ajouter au panier et de procéder au paiement sécurisé.",
        preview_icon: "🛒",
        preview_caption: "Simulation d'ajout au panier...",
    },
    ProjectInfo {
        id: 2,
        title: "Dashboard Analytics",
        technologies: "React, Chart.js, Node.js",
        description: "Un tableau de bord interactif pour visualiser les données de vente en temps réel. Inclut des graphiques dynamiques et des filtres avancés.",
        preview_icon: "📊",
        preview_caption: "Graphique en chargement...",
    },
    ProjectInfo {
        id: 3,
        title: "App Mobile Météo",
        technologies: "Flutter, OpenWeatherMap API",
        description: "Application mobile cross-platform affichant la météo locale avec des animations basées sur les conditions climatiques actuelles.",
        preview_icon: "🌤️",
        preview_caption: "24°C - Ensoleillé",
    },
];

pub fn lookup(id: u32) -> Option<&'static ProjectInfo> {
    PROJECTS.iter().find(|project| project.id == id)
}

pub fn lookup_attr(value: &str) -> Option<&'static ProjectInfo> {
    lookup(value.trim().parse::<u32>().ok()?)
}

impl ProjectInfo {
    pub fn id_attr(&self) -> String {
        self.id.to_string()
    }

    /// Labelled sections of the modal body, in display order.
    pub fn details(&self) -> [(&'static str, &'static str); 2] {
        [
            ("Technologies", self.technologies),
            ("Description", self.description),
        ]
    }
}
