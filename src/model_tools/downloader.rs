use crate::error::{AdcError, Result};
use hf_hub::{api::tokio::Api, Repo, RepoType};
use log::warn;
use std::path::PathBuf;
use tokio::fs;

/// 기본 사전학습 이미지 분류 모델
pub const DEFAULT_MODEL_ID: &str = "timm/vgg16.tv_in1k";

/// HuggingFace Hub에서 모델을 다운로드하는 구조체
#[derive(Debug, Clone)]
pub struct ModelDownloader {
    pub model_id: String,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DownloadStatus {
    NotDownloaded,
    Partial,
    Complete,
}

impl ModelDownloader {
    /// `models/<model_id의 '/'를 '-'로 바꾼 이름>`에 저장
    pub fn new(model_id: &str) -> Self {
        Self::with_output_root(model_id, PathBuf::from("models"))
    }

    pub fn with_output_root(model_id: &str, root: PathBuf) -> Self {
        let safe_model_name = model_id.replace('/', "-");
        Self {
            model_id: model_id.to_string(),
            output_dir: root.join(safe_model_name),
        }
    }

    /// 단일 파일 다운로드
    pub async fn download_file(&self, filename: &str) -> Result<PathBuf> {
        println!("📥 Downloading '{}' from '{}'...", filename, self.model_id);

        let api = Api::new().map_err(|e| AdcError::Download(e.to_string()))?;
        let repo = api.repo(Repo::new(self.model_id.clone(), RepoType::Model));
        let download_path = repo
            .get(filename)
            .await
            .map_err(|e| AdcError::Download(format!("{}: {}", filename, e)))?;

        fs::create_dir_all(&self.output_dir).await?;
        let final_path = self.output_dir.join(filename);
        fs::copy(&download_path, &final_path).await?;

        println!("✅ Successfully downloaded: '{}'", final_path.display());
        Ok(final_path)
    }

    /// 가중치 파일은 필수, config.json은 선택
    pub async fn download(&self) -> Result<PathBuf> {
        self.download_file("model.safetensors").await?;

        if let Err(e) = self.download_file("config.json").await {
            warn!("Failed to download 'config.json': {}", e);
        }

        println!("📁 Model directory: {}", self.output_dir.display());
        Ok(self.output_dir.clone())
    }

    pub fn check_download_status(&self) -> DownloadStatus {
        if !self.output_dir.exists() {
            return DownloadStatus::NotDownloaded;
        }

        let essential_files = ["model.safetensors", "config.json"];
        let found = essential_files
            .iter()
            .filter(|file| self.output_dir.join(file).exists())
            .count();

        match found {
            0 => DownloadStatus::NotDownloaded,
            n if n == essential_files.len() => DownloadStatus::Complete,
            _ => DownloadStatus::Partial,
        }
    }
}
