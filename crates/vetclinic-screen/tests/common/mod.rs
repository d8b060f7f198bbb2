#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use vetclinic_core::error::ServerError;
use vetclinic_core::models::Animal;
use vetclinic_core::{
    Confirm, Error, FilterSet, MutationEnvelope, Notice, NoticeLevel, Notifier, PageCount,
    PageRequest, PageResult, Payload, Resource, ResourceClient, ResourceId, Result,
};

/// A request the fake client received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List { page: u32, limit: u32, filters: FilterSet },
    Get(String),
    Create(Payload),
    Update(String, Payload),
    Delete(String),
}

/// In-memory client that records every call and answers from queues.
///
/// Queued answers are consumed in order; with an empty queue `list`
/// answers one page holding `records`, `get` looks up `records`, and
/// mutations succeed.
pub struct FakeClient<R> {
    pub calls: Mutex<Vec<Call>>,
    pub records: Mutex<Vec<R>>,
    pub list_answers: Mutex<VecDeque<Result<PageResult<R>>>>,
    pub mutation_error: Mutex<Option<u16>>,
}

impl<R: Resource> FakeClient<R> {
    pub fn new(records: Vec<R>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            records: Mutex::new(records),
            list_answers: Mutex::new(VecDeque::new()),
            mutation_error: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::List { .. }))
            .collect()
    }

    pub fn mutation_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Create(_) | Call::Update(..) | Call::Delete(_)))
            .count()
    }

    pub fn push_list(&self, answer: Result<PageResult<R>>) {
        self.list_answers.lock().unwrap().push_back(answer);
    }

    pub fn fail_mutations_with(&self, status: u16) {
        *self.mutation_error.lock().unwrap() = Some(status);
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn mutation_result(&self) -> Result<()> {
        match *self.mutation_error.lock().unwrap() {
            Some(status) => Err(ServerError::new(status, Some("boom".into())).into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceClient<R> for FakeClient<R> {
    async fn list(&self, page: &PageRequest, filters: &FilterSet) -> Result<PageResult<R>> {
        self.record(Call::List {
            page: page.page(),
            limit: page.limit(),
            filters: filters.clone(),
        });
        if let Some(answer) = self.list_answers.lock().unwrap().pop_front() {
            return answer;
        }
        let data = self.records.lock().unwrap().clone();
        Ok(reported_page(data, page, 1))
    }

    async fn get(&self, id: &ResourceId) -> Result<R> {
        self.record(Call::Get(id.to_string()));
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| Error::NotFound {
                resource: R::PATH.to_string(),
                id: id.to_string(),
            })
    }

    async fn create(&self, payload: &Payload) -> Result<R> {
        self.record(Call::Create(payload.clone()));
        self.mutation_result()?;
        let mut value = serde_json::to_value(payload).unwrap();
        value[id_field::<R>()] = json!("new-id");
        Ok(serde_json::from_value(value).unwrap())
    }

    async fn update(&self, id: &ResourceId, payload: &Payload) -> Result<R> {
        self.record(Call::Update(id.to_string(), payload.clone()));
        self.mutation_result()?;
        let existing = self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .unwrap();
        let mut value = serde_json::to_value(existing).unwrap();
        for (k, v) in payload.iter() {
            if !v.is_null() {
                value[k.as_str()] = v.clone();
            }
        }
        Ok(serde_json::from_value(value).unwrap())
    }

    async fn delete(&self, id: &ResourceId) -> Result<MutationEnvelope<()>> {
        self.record(Call::Delete(id.to_string()));
        self.mutation_result()?;
        Ok(MutationEnvelope::new((), "Animal eliminado exitosamente", true, 200))
    }
}

fn id_field<R: Resource>() -> &'static str {
    match R::PATH {
        "animales" => "id_animal",
        other => panic!("no id field known for {other}"),
    }
}

/// A page whose count the server reported.
pub fn reported_page<R>(data: Vec<R>, page: &PageRequest, total_pages: u32) -> PageResult<R> {
    PageResult {
        total: None,
        page: page.page(),
        limit: page.limit(),
        total_pages: PageCount::Reported(total_pages),
        message: "ok".into(),
        success: true,
        data,
    }
}

pub fn page_of<R>(data: Vec<R>, total_pages: u32) -> PageResult<R> {
    reported_page(data, &PageRequest::first(10).unwrap(), total_pages)
}

pub fn animal(id: &str, name: &str) -> Animal {
    serde_json::from_value(json!({
        "id_animal": id,
        "nombre_animal": name,
        "especie_animal": "Perro",
        "fecha_nacimiento_animal": "2020-05-01T00:00:00Z",
        "propietario_id": "p1",
        "categoria_id": "c1",
        "usuario_id_creacion": "u1"
    }))
    .unwrap()
}

/// Collects notices for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn levels(&self) -> Vec<NoticeLevel> {
        self.notices.lock().unwrap().iter().map(|n| n.level).collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Answers with a fixed choice and remembers the prompt.
pub struct ScriptedConfirm {
    pub answer: bool,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Confirm for ScriptedConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}
