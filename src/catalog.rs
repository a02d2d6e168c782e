#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub notes: &'static [Note],
}

impl Category {
    /// Note ids are only unique inside one category.
    pub fn note(&self, id: &str) -> Option<&'static Note> {
        self.notes.iter().find(|note| note.id == id)
    }
}

pub fn find_category(catalog: &'static [Category], id: &str) -> Option<&'static Category> {
    catalog.iter().find(|category| category.id == id)
}

pub static CATEGORIES: &[Category] = &[
    Category {
        id: "chinese",
        name: "中文",
        notes: &[
            Note {
                id: "classical_chinese",
                title: "文言文秘笈",
                content: "之乎者也終極攻略，包括常用虛詞、實詞解析。重點掌握：\n1. 虛詞：之、乎、者、也、矣、焉、哉\n2. 實詞：通假字、古今異義\n3. 句式：判斷句、被動句、倒裝句",
                tags: &["文言文", "虛詞", "DSE中文"],
            },
            Note {
                id: "essay_writing",
                title: "作文神技",
                content: "議論文三段論 + 記敘文情感渲染技巧\n議論文結構：\n- 引論：提出論點\n- 本論：論證分析\n- 結論：總結昇華\n記敘文技巧：細節描寫、情感渲染、首尾呼應",
                tags: &["作文", "議論文", "記敘文"],
            },
        ],
    },
    Category {
        id: "english",
        name: "英文",
        notes: &[
            Note {
                id: "Vocab/ phases",
                title: "useful in writing",
                content: "- As clear as mud = very unclear \n- A gloomy(暗淡）/rosy(光明）outlook/prospect \n- Provide food for thought 發人深省\n- venerate/revere =greatly admire\n- my alma mater 母校\n- change the trajectory of somebody's life",
                tags: &["phases", "vocab", "DSE English"],
            },
            Note {
                id: "grammar_hacks",
                title: "Grammar Hacks",
                content: "Present Perfect vs Past Simple rules and exceptions:\n- Present Perfect: actions with present relevance\n- Past Simple: completed actions in the past\n- Key words: already, just, yet, since, for",
                tags: &["grammar", "tenses", "DSE English"],
            },
            Note {
                id: "essay_formula",
                title: "Essay Writing Formula",
                content: "Introduction + Body paragraphs + Conclusion structure:\n1. Hook + Background + Thesis\n2. Topic sentence + Evidence + Analysis\n3. Restate thesis + Summary + Call to action",
                tags: &["essay", "writing", "structure"],
            },
        ],
    },
    Category {
        id: "econ",
        name: "Econ",
        notes: &[
            Note {
                id: "supply_demand",
                title: "Supply & Demand",
                content: "Market equilibrium analysis and price mechanisms:\n- Supply curve: upward sloping\n- Demand curve: downward sloping\n- Equilibrium: where S = D\n- Price changes affect quantity demanded/supplied",
                tags: &["microeconomics", "market", "DSE Econ"],
            },
            Note {
                id: "gdp_calculation",
                title: "GDP Calculation",
                content: "Nominal vs Real GDP, inflation adjustments:\n- Nominal GDP: current market prices\n- Real GDP: constant prices (adjusted for inflation)\n- GDP Deflator = (Nominal GDP / Real GDP) × 100",
                tags: &["macroeconomics", "GDP", "inflation"],
            },
        ],
    },
    Category {
        id: "chinese_history",
        name: "中史",
        notes: &[
            Note {
                id: "tang_dynasty",
                title: "唐朝盛世",
                content: "貞觀之治、開元盛世政治經濟文化特色：\n政治：三省六部制、科舉制度完善\n經濟：農業發達、商業繁榮、絲綢之路\n文化：詩歌鼎盛、佛教興盛、對外開放",
                tags: &["唐朝", "政治", "經濟"],
            },
            Note {
                id: "ming_qing",
                title: "明清變遷",
                content: "明末清初政治制度變化與影響：\n明朝：內閣制、廠衛制度\n清朝：議政王大臣會議、軍機處\n影響：中央集權加強、滿漢關係緊張",
                tags: &["明清", "政治制度", "變遷"],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn note_ids_are_unique_within_each_category() {
        for category in CATEGORIES {
            let ids: HashSet<_> = category.notes.iter().map(|note| note.id).collect();
            assert_eq!(ids.len(), category.notes.len(), "{}", category.id);
        }
    }

    #[test]
    fn category_ids_are_unique_and_ordered() {
        let ids: Vec<_> = CATEGORIES.iter().map(|category| category.id).collect();
        assert_eq!(ids, ["chinese", "english", "econ", "chinese_history"]);
    }

    #[test]
    fn lookups_are_scoped_to_a_category() {
        let econ = find_category(CATEGORIES, "econ").unwrap();
        assert_eq!(econ.note("gdp_calculation").unwrap().title, "GDP Calculation");
        assert!(econ.note("grammar_hacks").is_none());
        assert!(find_category(CATEGORIES, "physics").is_none());
    }
}
