use std::time::Duration;

use ubers_types::{MountId, Transition};

use super::{Completion, ScreenAction, SessionStamp, Timed};
use crate::schedule::Schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause {
    pub title: &'static str,
    pub text: &'static str,
    /// 1 to 5, drawn as a row of marks.
    pub severity: u8,
}

pub const CLAUSES: [Clause; 4] = [
    Clause {
        title: "O SILÊNCIO (OMERTÀ)",
        text: "O silêncio é nossa moeda mais valiosa. O que é visto, ouvido ou realizado dentro da organização jamais deve ser compartilhado com o mundo exterior. Violações resultam em rescisão imediata e definitiva.",
        severity: 5,
    },
    Clause {
        title: "A LEALDADE ABSOLUTA",
        text: "A hierarquia é sagrada. Ordens não são sugestões. A lealdade ao sistema precede qualquer interesse pessoal, familiar ou legal.",
        severity: 5,
    },
    Clause {
        title: "A PERMANÊNCIA",
        text: "A entrada é opcional. A saída, inexistente. Ao aceitar os termos, o associado compreende que este vínculo não possui data de expiração.",
        severity: 4,
    },
    Clause {
        title: "O RISCO",
        text: "Todo participante assume total responsabilidade pelos riscos inerentes ao sistema. Sacrifícios serão exigidos. O fracasso de um compromete todos.",
        severity: 4,
    },
];

/// Shown in turn while the document is "loading", i.e. before the first clause.
pub const CONTRACT_STATUS_MESSAGES: [&str; 5] = [
    "Verificando integridade do documento…",
    "Validando credenciais de acesso…",
    "Descriptografando conteúdo…",
    "Aplicando assinatura digital…",
    "Contrato liberado. Leia com atenção.",
];

const STATUS_INTERVAL: Duration = Duration::from_millis(1200);
const FIRST_CLAUSE_DELAY: Duration = Duration::from_millis(5500);
const CLAUSE_INTERVAL: Duration = Duration::from_millis(1200);
const SEAL_DELAY: Duration = Duration::from_millis(800);
const BUTTON_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy)]
pub(super) enum ContractTask {
    RotateStatus,
    RevealClause,
    ShowSeal,
    EnableButton,
}

#[derive(Debug)]
pub struct ContractScreen {
    pub(super) completion: Completion,
    schedule: Schedule<ContractTask>,
    stamp: SessionStamp,
    status_index: usize,
    visible_clauses: usize,
    seal_visible: bool,
    button_enabled: bool,
}

impl ContractScreen {
    #[must_use]
    pub fn new(mount: MountId) -> Self {
        let mut schedule = Schedule::new();
        schedule.after(STATUS_INTERVAL, ContractTask::RotateStatus);
        schedule.after(FIRST_CLAUSE_DELAY, ContractTask::RevealClause);
        Self {
            completion: Completion::new(mount),
            schedule,
            stamp: SessionStamp::now(),
            status_index: 0,
            visible_clauses: 0,
            seal_visible: false,
            button_enabled: false,
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.advance(delta);
    }

    pub fn handle(&mut self, action: ScreenAction) {
        if action != ScreenAction::Submit || !self.button_enabled {
            return;
        }
        if self.completion.emit(Transition::Acknowledge) {
            tracing::debug!("Contract acknowledged");
        }
    }

    /// The rotating status line, hidden once clauses start appearing.
    #[must_use]
    pub fn status_text(&self) -> Option<&'static str> {
        (self.visible_clauses == 0).then(|| CONTRACT_STATUS_MESSAGES[self.status_index])
    }

    #[must_use]
    pub fn visible_clauses(&self) -> &'static [Clause] {
        &CLAUSES[..self.visible_clauses]
    }

    #[must_use]
    pub fn seal_visible(&self) -> bool {
        self.seal_visible
    }

    #[must_use]
    pub fn button_enabled(&self) -> bool {
        self.button_enabled
    }

    #[must_use]
    pub fn stamp(&self) -> SessionStamp {
        self.stamp
    }
}

impl Timed for ContractScreen {
    type Task = ContractTask;

    fn schedule_mut(&mut self) -> &mut Schedule<ContractTask> {
        &mut self.schedule
    }

    fn fire(&mut self, task: ContractTask) {
        match task {
            ContractTask::RotateStatus => {
                if self.visible_clauses > 0 {
                    return;
                }
                if self.status_index + 1 < CONTRACT_STATUS_MESSAGES.len() {
                    self.status_index += 1;
                    self.schedule.after(STATUS_INTERVAL, ContractTask::RotateStatus);
                }
            }
            ContractTask::RevealClause => {
                self.visible_clauses += 1;
                if self.visible_clauses < CLAUSES.len() {
                    self.schedule.after(CLAUSE_INTERVAL, ContractTask::RevealClause);
                } else {
                    self.schedule.after(SEAL_DELAY, ContractTask::ShowSeal);
                    self.schedule.after(BUTTON_DELAY, ContractTask::EnableButton);
                }
            }
            ContractTask::ShowSeal => self.seal_visible = true,
            ContractTask::EnableButton => self.button_enabled = true,
        }
    }
}
